use inksac::prelude::*;

#[derive(Debug, Clone, Copy)]
pub struct SyntaxHighlighter {
    color_support: ColorSupport,
}

impl Default for SyntaxHighlighter {
    fn default() -> Self {
        Self::new()
    }
}

impl SyntaxHighlighter {
    pub fn new() -> Self {
        let support = check_color_support().unwrap_or(ColorSupport::NoColor);
        Self {
            color_support: support,
        }
    }

    /// A highlighter that never emits escape codes.
    pub fn plain() -> Self {
        Self {
            color_support: ColorSupport::NoColor,
        }
    }

    fn colorless(&self) -> bool {
        matches!(self.color_support, ColorSupport::NoColor)
    }

    /// Colors the command word and `--` flags. Whitespace is kept as typed so
    /// the cursor position stays valid.
    pub fn highlight_command(&self, input: &str, is_known: impl Fn(&str) -> bool) -> String {
        if self.colorless() || input.trim().is_empty() {
            return input.to_string();
        }

        let mut out = String::with_capacity(input.len() * 2);
        let mut first = true;
        let mut rest = input;

        while !rest.is_empty() {
            let ws_len = rest.len() - rest.trim_start().len();
            out.push_str(&rest[..ws_len]);
            rest = &rest[ws_len..];
            if rest.is_empty() {
                break;
            }

            let word_len = rest.find(char::is_whitespace).unwrap_or(rest.len());
            let word = &rest[..word_len];
            rest = &rest[word_len..];

            if first {
                let color = if is_known(word) { Color::Cyan } else { Color::Red };
                let style = Style::builder().foreground(color).bold().build();
                out.push_str(&word.style(style).to_string());
                first = false;
            } else if word.starts_with('-') {
                let flag_style = Style::builder().foreground(Color::Yellow).build();
                out.push_str(&word.style(flag_style).to_string());
            } else {
                out.push_str(word);
            }
        }

        out
    }

    pub fn highlight_error(&self, error: &str) -> String {
        if self.colorless() {
            return error.to_string();
        }

        let error_style = Style::builder().foreground(Color::Red).bold().build();

        error.style(error_style).to_string()
    }

    pub fn highlight_success(&self, message: &str) -> String {
        if self.colorless() {
            return message.to_string();
        }

        let success_style = Style::builder().foreground(Color::Green).build();

        message.style(success_style).to_string()
    }

    pub fn highlight_path(&self, path: &str) -> String {
        if self.colorless() {
            return path.to_string();
        }

        let path_style = Style::builder().foreground(Color::Cyan).build();

        path.style(path_style).to_string()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_plain_passes_through() {
        let highlighter = SyntaxHighlighter::plain();
        assert_eq!(
            highlighter.highlight_command("os   --cpus", |_| true),
            "os   --cpus"
        );
        assert_eq!(highlighter.highlight_error("Operation failed"), "Operation failed");
        assert_eq!(highlighter.highlight_path("/tmp"), "/tmp");
    }
}
