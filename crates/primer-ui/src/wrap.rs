use unicode_segmentation::UnicodeSegmentation;

/// Width in grapheme clusters.
pub fn display_width(s: &str) -> usize {
    s.graphemes(true).count()
}

/// Greedy word wrap. Explicit newlines are kept; words wider than `width`
/// are split on grapheme boundaries.
pub fn wrap(text: &str, width: usize) -> Vec<String> {
    let width = width.max(1);
    let mut out = Vec::new();

    for paragraph in text.split('\n') {
        let mut line = String::new();
        let mut line_w = 0;
        let mut any = false;

        for word in paragraph.split_whitespace() {
            any = true;
            let w = display_width(word);
            if line_w > 0 && line_w + 1 + w <= width {
                line.push(' ');
                line.push_str(word);
                line_w += 1 + w;
                continue;
            }
            if line_w > 0 {
                out.push(std::mem::take(&mut line));
                line_w = 0;
            }
            if w <= width {
                line.push_str(word);
                line_w = w;
                continue;
            }
            // overlong word
            for g in word.graphemes(true) {
                if line_w == width {
                    out.push(std::mem::take(&mut line));
                    line_w = 0;
                }
                line.push_str(g);
                line_w += 1;
            }
        }

        if line_w > 0 || !any {
            out.push(line);
        }
    }
    out
}
