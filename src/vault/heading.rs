/// Extract the first ATX heading (`#` through `######`) from markdown text.
///
/// YAML front matter at the very top and fenced code blocks are skipped.
pub fn first_heading(text: &str) -> Option<String> {
    let mut lines = text.lines().peekable();

    if lines.peek().map(|l| l.trim_end()) == Some("---") {
        lines.next();
        for line in lines.by_ref() {
            if matches!(line.trim_end(), "---" | "...") {
                break;
            }
        }
    }

    let mut fence: Option<&str> = None;
    for line in lines {
        let trimmed = line.trim_start();

        if let Some(open) = fence {
            if trimmed.starts_with(open) {
                fence = None;
            }
            continue;
        }
        if trimmed.starts_with("```") {
            fence = Some("```");
            continue;
        }
        if trimmed.starts_with("~~~") {
            fence = Some("~~~");
            continue;
        }

        // More than three spaces of indentation is a code block
        if line.len() - trimmed.len() > 3 {
            continue;
        }

        let level = trimmed.chars().take_while(|&c| c == '#').count();
        if level == 0 || level > 6 {
            continue;
        }

        let rest = &trimmed[level..];
        if !rest.is_empty() && !rest.starts_with([' ', '\t']) {
            continue;
        }

        let heading = rest.trim().trim_end_matches('#').trim_end();
        if !heading.is_empty() {
            return Some(heading.to_string());
        }
    }

    None
}
