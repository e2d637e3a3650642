use std::io::{self, BufRead, Write};

/// Prompt/reply and progress lines over any reader and writer, so runs can be
/// driven from tests without a terminal
pub struct Console<R, W> {
    input: R,
    output: W,
    quiet: bool,
}

impl Console<io::StdinLock<'static>, io::Stdout> {
    pub fn stdio(quiet: bool) -> Self {
        Console::new(io::stdin().lock(), io::stdout(), quiet)
    }
}

impl<R: BufRead, W: Write> Console<R, W> {
    pub fn new(input: R, output: W, quiet: bool) -> Self {
        Self {
            input,
            output,
            quiet,
        }
    }

    /// Print `prompt` and read one trimmed line
    pub fn ask(&mut self, prompt: &str) -> io::Result<String> {
        writeln!(self.output, "{}", prompt)?;
        self.output.flush()?;
        let mut line = String::new();
        self.input.read_line(&mut line)?;
        Ok(line.trim().to_string())
    }

    /// Progress line, suppressed in quiet mode
    pub fn progress(&mut self, message: &str) {
        if !self.quiet {
            let _ = writeln!(self.output, "{}", message);
        }
    }

    /// Always printed
    pub fn say(&mut self, message: &str) {
        let _ = writeln!(self.output, "{}", message);
    }

    #[cfg(test)]
    pub fn into_output(self) -> W {
        self.output
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Cursor;

    #[test]
    fn test_ask_reads_trimmed_line() {
        let input = Cursor::new("  https://shop.example.com/products/tee \nignored\n");
        let mut console = Console::new(input, Vec::new(), false);
        let answer = console.ask("Enter the Shopify product URL:").unwrap();
        assert_eq!(answer, "https://shop.example.com/products/tee");

        let out = String::from_utf8(console.into_output()).unwrap();
        assert_eq!(out, "Enter the Shopify product URL:\n");
    }

    #[test]
    fn test_quiet_suppresses_progress_only() {
        let mut console = Console::new(Cursor::new(""), Vec::new(), true);
        console.progress("Processing image URL: x");
        console.say("Images downloaded successfully.");
        let out = String::from_utf8(console.into_output()).unwrap();
        assert_eq!(out, "Images downloaded successfully.\n");
    }
}
