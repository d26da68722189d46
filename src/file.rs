// src/file.rs

use std::{
    fs::{self, File},
    io::{self, Write},
    path::{Path, PathBuf},
};

use csv::{QuoteStyle, Terminator, WriterBuilder};
use tempfile::NamedTempFile;

use crate::config::consts::{DELIMITER, UTF8_BOM};
use crate::data::ResultTable;
use crate::error::{Result, ScrapeError};

/// Encode the whole table: BOM, header line, one line per municipality.
/// Semicolon-separated, CRLF-terminated, quoting only where needed.
pub fn to_export_bytes(table: &ResultTable) -> io::Result<Vec<u8>> {
    let mut w = WriterBuilder::new()
        .delimiter(DELIMITER)
        .terminator(Terminator::CRLF)
        .quote_style(QuoteStyle::Necessary)
        .from_writer(UTF8_BOM.to_vec());

    w.write_record(table.headers())?;
    for rec in table.records() {
        w.write_record(rec)?;
    }
    w.into_inner().map_err(|e| e.into_error())
}

/// Write the export once all rows are known.
/// The destination is either fully replaced or left as it was.
/// Returns the final path written to.
pub fn write_export(path: &Path, table: &ResultTable) -> Result<PathBuf> {
    let contents = to_export_bytes(table).map_err(|e| ScrapeError::output(path, e))?;
    replace_file(path, |f| f.write_all(&contents)).map_err(|e| ScrapeError::output(path, e))?;
    Ok(path.to_path_buf())
}

/// Fill a temp file next to `path`, then rename it over `path`.
/// On any error the temp file is removed and `path` is untouched.
fn replace_file<F>(path: &Path, fill: F) -> io::Result<()>
where
    F: FnOnce(&mut File) -> io::Result<()>,
{
    let dir = match path.parent() {
        Some(p) if !p.as_os_str().is_empty() => p,
        _ => Path::new("."),
    };
    ensure_directory(dir)?;

    let mut tmp = NamedTempFile::new_in(dir)?;
    fill(tmp.as_file_mut())?;
    tmp.as_file().sync_all()?;
    tmp.persist(path).map_err(|e| e.error)?;
    Ok(())
}

pub fn ensure_directory(dir: &Path) -> io::Result<()> {
    if dir.exists() && !dir.is_dir() {
        return Err(io::Error::new(
            io::ErrorKind::AlreadyExists,
            format!("path exists but is not a directory: {}", dir.display()),
        ));
    }
    if !dir.exists() { fs::create_dir_all(dir)?; }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::data::{Figures, MunicipalityRef, MunicipalitySummary, ResultRow};

    fn table(rows: &[(&str, &str, &[(&str, &str)])]) -> ResultTable {
        let mut t = ResultTable::new();
        for (code, name, votes) in rows {
            let r = MunicipalityRef { code: s!(*code), name: s!(*name), detail_url: s!() };
            let figures = Figures { registered: s!("100"), envelopes: s!("60"), valid: s!("59") };
            t.push(ResultRow {
                summary: MunicipalitySummary::new(&r, figures),
                votes: votes.iter().map(|(p, v)| (s!(*p), s!(*v))).collect(),
            });
        }
        t
    }

    #[test]
    fn starts_with_bom_and_uses_semicolons() {
        let t = table(&[("500054", "Praha 1", &[("ANO", "120")])]);
        let bytes = to_export_bytes(&t).unwrap();
        assert!(bytes.starts_with(UTF8_BOM));
        let text = std::str::from_utf8(&bytes[UTF8_BOM.len()..]).unwrap();
        assert_eq!(text, "code;location;registered;envelopes;valid;ANO\r\n500054;Praha 1;100;60;59;120\r\n");
    }

    #[test]
    fn delimiter_inside_name_is_quoted() {
        let t = table(&[("1", "Praha; Vinohrady", &[("Strana \"X\"", "3")])]);
        let bytes = to_export_bytes(&t).unwrap();
        let text = String::from_utf8_lossy(&bytes[UTF8_BOM.len()..]).into_owned();
        assert!(text.contains(r#";"Strana ""X"""#));
        assert!(text.contains(r#"1;"Praha; Vinohrady";"#));
    }

    fn entries(dir: &Path) -> Vec<PathBuf> {
        fs::read_dir(dir).unwrap().map(|e| e.unwrap().path()).collect()
    }

    fn tmp_dir(name: &str) -> PathBuf {
        let mut p = std::env::temp_dir();
        p.push(format!("volby_file_{}", name));
        let _ = fs::remove_dir_all(&p);
        fs::create_dir_all(&p).unwrap();
        p
    }

    #[test]
    fn failed_write_keeps_previous_export() {
        let dir = tmp_dir("failed_write");
        let out = dir.join("vysledky.csv");
        fs::write(&out, "previous good export").unwrap();

        let err = replace_file(&out, |f| {
            f.write_all(b"000211;Obec 211;21556;14")?;
            Err(io::Error::new(io::ErrorKind::StorageFull, "No space left on device"))
        })
        .unwrap_err();

        assert_eq!(err.kind(), io::ErrorKind::StorageFull);
        assert_eq!(fs::read_to_string(&out).unwrap(), "previous good export");
        assert_eq!(entries(&dir), vec![out]);
    }

    #[test]
    fn successful_write_replaces_previous_export() {
        let dir = tmp_dir("replace");
        let out = dir.join("vysledky.csv");
        fs::write(&out, "old").unwrap();

        let t = table(&[("500054", "Praha 1", &[("ANO", "120")])]);
        write_export(&out, &t).unwrap();

        assert_eq!(fs::read(&out).unwrap(), to_export_bytes(&t).unwrap());
        assert_eq!(entries(&dir), vec![out]);
    }

    #[test]
    fn empty_table_is_header_only() {
        let bytes = to_export_bytes(&ResultTable::new()).unwrap();
        assert_eq!(&bytes[UTF8_BOM.len()..], b"code;location;registered;envelopes;valid\r\n");
    }
}
