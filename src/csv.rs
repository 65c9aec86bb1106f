// src/csv.rs
use std::io::{self, Write};

use crate::specs::listing::Record;

/// Output separator.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Delim {
    Csv,
    Tsv,
}

impl Delim {
    pub fn sep(self) -> char {
        match self { Delim::Csv => ',', Delim::Tsv => '\t' }
    }
}

fn needs_quotes(field: &str, sep: char) -> bool {
    field.contains(sep) || field.contains('"') || field.contains('\n') || field.contains('\r')
}

/// Write a single CSV/TSV row to any writer.
pub fn write_row<W: Write, S: AsRef<str>>(mut w: W, row: &[S], sep: char) -> io::Result<()> {
    let mut first = true;
    for cell in row {
        let cell = cell.as_ref();
        if !first { write!(w, "{}", sep)?; } else { first = false; }
        if needs_quotes(cell, sep) {
            let escaped = cell.replace('"', "\"\"");
            write!(w, "\"{}\"", escaped)?;
        } else {
            write!(w, "{}", cell)?;
        }
    }
    writeln!(w)
}

/// Stream records (optionally preceded by a header line) to `w`.
pub fn write_records<W: Write>(mut w: W, records: &[Record], include_headers: bool, delim: Delim) -> io::Result<()> {
    let sep = delim.sep();
    if include_headers {
        write_row(&mut w, &Record::HEADERS, sep)?;
    }
    for r in records {
        write_row(&mut w, &r.to_row(), sep)?;
    }
    Ok(())
}

/// Records as one string (clipboard).
pub fn records_to_string(records: &[Record], include_headers: bool, delim: Delim) -> String {
    let mut buf: Vec<u8> = Vec::new();
    let _ = write_records(&mut buf, records, include_headers, delim);

    match String::from_utf8(buf) {
        Ok(s) => s,
        Err(e) => String::from_utf8_lossy(&e.into_bytes()).into_owned(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn quotes_only_when_needed() {
        let records = vec![
            Record::new("Dr. A, MD", "Dentist", "4.5"),
            Record::new("Dr. \"B\"", "N/A", "N/A"),
        ];
        let out = records_to_string(&records, true, Delim::Csv);
        assert_eq!(
            out,
            "Name,Specialty,Rating\n\"Dr. A, MD\",Dentist,4.5\n\"Dr. \"\"B\"\"\",N/A,N/A\n"
        );
    }

    #[test]
    fn tsv_leaves_commas_alone() {
        let records = vec![Record::new("Dr. A, MD", "Dentist", "4.5")];
        assert_eq!(records_to_string(&records, false, Delim::Tsv), "Dr. A, MD\tDentist\t4.5\n");
    }
}
