//! Line-oriented items report.

use std::io::{self, Write};

use crate::types::Quantity;

pub const REPORT_HEADER: &str = "Items Report";

/// Writes the header followed by one `item -> quantity` line per entry.
pub fn write_report<'a, W, I>(out: &mut W, entries: I) -> io::Result<()>
where
    W: Write + ?Sized,
    I: IntoIterator<Item = (&'a str, Quantity)>,
{
    writeln!(out, "{REPORT_HEADER}")?;
    for (item, quantity) in entries {
        writeln!(out, "{item} -> {quantity}")?;
    }
    out.flush()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn renders_header_and_lines() {
        let mut out = Vec::new();
        write_report(&mut out, [("apple", 7), ("banana", 5)]).unwrap();
        assert_eq!(
            String::from_utf8(out).unwrap(),
            "Items Report\napple -> 7\nbanana -> 5\n"
        );
    }

    #[test]
    fn empty_report_is_header_only() {
        let mut out = Vec::new();
        write_report(&mut out, std::iter::empty::<(&str, Quantity)>()).unwrap();
        assert_eq!(out, b"Items Report\n");
    }
}
