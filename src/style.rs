//! Fixed ANSI SGR palette used when rendering diff lines.

/// Escape that ends any styled span
pub const RESET: &[u8] = b"\x1b[0m";

/// Rendering role of a styled span
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Role {
    /// `--- ` / `+++ ` file header lines
    FileName,
    /// Lines with no recognized prefix (`diff`, `index`, `\ No newline ...`)
    Meta,
    /// The `@@ ... @@` part of a hunk header
    ContextRange,
    Added,
    Removed,
}

impl Role {
    /// Escape that starts a span in this role
    pub fn escape(self) -> &'static [u8] {
        match self {
            Role::FileName | Role::Meta => b"\x1b[1m", // bold
            Role::ContextRange => b"\x1b[36m",         // cyan
            Role::Added => b"\x1b[32m",                // green
            Role::Removed => b"\x1b[33m",              // yellow
        }
    }

    /// Append `text` wrapped in this role's escape and [`RESET`]
    pub fn paint(self, text: &[u8], out: &mut Vec<u8>) {
        out.extend_from_slice(self.escape());
        out.extend_from_slice(text);
        out.extend_from_slice(RESET);
    }
}
