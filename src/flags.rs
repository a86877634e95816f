use crate::error::ShellError;
use std::collections::HashMap;

#[derive(Debug, Clone)]
pub struct Flags {
    flags: HashMap<String, Flag>,
}

#[derive(Debug, Clone)]
pub struct Flag {
    pub short: String,
    pub long: String,
    pub description: String,
    pub takes_value: bool,
    pub value: Option<String>,
}

impl Default for Flags {
    fn default() -> Self {
        Self::new()
    }
}

impl Flags {
    pub fn new() -> Self {
        let mut flags = HashMap::new();

        let table = [
            ("help", "-h", "--help", "Print this help message", false),
            ("version", "-v", "--version", "Show version information", false),
            ("username", "-u", "--username", "Name to greet the session with (required)", true),
            ("quiet", "-q", "--quiet", "Suppress warnings", false),
            ("debug", "-d", "--debug", "Enable debug output", false),
        ];

        for (name, short, long, description, takes_value) in table {
            flags.insert(
                name.to_string(),
                Flag {
                    short: short.to_string(),
                    long: long.to_string(),
                    description: description.to_string(),
                    takes_value,
                    value: None,
                },
            );
        }

        Flags { flags }
    }

    /// Parses `--long`, `--long=value`, `--long value` and `-s value`.
    /// Unknown arguments are ignored.
    pub fn parse(&mut self, args: &[String]) -> Result<(), ShellError> {
        let mut i = 0;
        while i < args.len() {
            let arg = &args[i];
            let (key, inline_value) = match arg.split_once('=') {
                Some((key, value)) if key.starts_with("--") => (key, Some(value)),
                _ => (arg.as_str(), None),
            };

            if let Some(flag) = self
                .flags
                .values_mut()
                .find(|flag| key == flag.short || key == flag.long)
            {
                if flag.takes_value {
                    if let Some(value) = inline_value {
                        flag.value = Some(value.to_string());
                    } else if i + 1 < args.len() {
                        flag.value = Some(args[i + 1].clone());
                        i += 1;
                    } else {
                        return Err(ShellError::FlagError(format!(
                            "Flag {} requires a value",
                            key
                        )));
                    }
                } else {
                    flag.value = Some("true".to_string());
                }
            }
            i += 1;
        }
        Ok(())
    }

    pub fn is_set(&self, name: &str) -> bool {
        self.flags
            .get(name)
            .and_then(|f| f.value.as_ref())
            .is_some()
    }

    pub fn get_value(&self, name: &str) -> Option<&String> {
        self.flags.get(name).and_then(|f| f.value.as_ref())
    }

    /// The session username. Blank values count as missing.
    pub fn username(&self) -> Result<&str, ShellError> {
        self.get_value("username")
            .map(|s| s.trim())
            .filter(|s| !s.is_empty())
            .ok_or(ShellError::UsernameNotProvided)
    }

    pub fn print_help(&self) {
        println!("Usage: fileman --username=<name> [OPTIONS]");
        println!("\nOptions:");
        let mut flags: Vec<&Flag> = self.flags.values().collect();
        flags.sort_by(|a, b| a.long.cmp(&b.long));
        for flag in flags {
            println!("  {}, {:<15} {}", flag.short, flag.long, flag.description);
        }
    }
}
