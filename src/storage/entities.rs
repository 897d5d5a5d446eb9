use std::fmt::Display;

use serde::Serialize;

/// The day's tasks, in the order the user entered them. Duplicates are allowed.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
#[serde(transparent)]
pub struct TaskList(Vec<String>);

impl TaskList {
    /// Parses user input. Both `,` and the full-width `，` separate tasks, so the list can be typed
    /// with either keyboard layout.
    pub fn from_input(input: &str) -> Self {
        Self(
            input
                .split([',', '，'])
                .map(str::trim)
                .filter(|v| !v.is_empty())
                .map(String::from)
                .collect(),
        )
    }

    /// Parses the stored form, one task per line.
    pub fn from_lines(content: &str) -> Self {
        Self(
            content
                .lines()
                .map(str::trim)
                .filter(|v| !v.is_empty())
                .map(String::from)
                .collect(),
        )
    }

    pub fn to_lines(&self) -> String {
        self.0.join("\n")
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = &str> {
        self.0.iter().map(String::as_str)
    }
}

/// Numbered listing, one task per line starting from 1.
impl Display for TaskList {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        for (index, task) in self.iter().enumerate() {
            if index > 0 {
                writeln!(f)?;
            }
            write!(f, "{}. {task}", index + 1)?;
        }
        Ok(())
    }
}
