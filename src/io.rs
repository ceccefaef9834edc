//! Reading and writing airfoil point files. The file extension selects the encoding.

use crate::airfoil::Airfoil;
use crate::errors::{AirfoilError, Result};
use ncollide2d::na::Point2;
use std::fmt::Write as _;
use std::fs;
use std::path::Path;
use std::str::FromStr;

#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum AirfoilFormat {
    /// A name header line, optionally starting with `#`, followed by whitespace separated `x y`
    /// rows
    Dat,

    /// Comma separated table with `x`, `y` and `name` columns
    Csv,

    /// `{"name": .., "x": [..], "y": [..]}`
    Json,
}

impl FromStr for AirfoilFormat {
    type Err = AirfoilError;

    fn from_str(s: &str) -> Result<Self> {
        match s.to_ascii_lowercase().as_str() {
            "dat" => Ok(AirfoilFormat::Dat),
            "csv" => Ok(AirfoilFormat::Csv),
            "json" => Ok(AirfoilFormat::Json),
            _ => Err(AirfoilError::UnsupportedFormat(s.to_string())),
        }
    }
}

impl AirfoilFormat {
    pub fn from_path(path: &Path) -> Result<Self> {
        let ext = path
            .extension()
            .and_then(|e| e.to_str())
            .ok_or_else(|| AirfoilError::UnsupportedFormat(path.display().to_string()))?;
        ext.parse()
    }

    pub fn parse(&self, text: &str) -> Result<Airfoil> {
        match self {
            AirfoilFormat::Dat => parse_dat(text),
            AirfoilFormat::Csv => parse_csv(text),
            AirfoilFormat::Json => Ok(serde_json::from_str(text)?),
        }
    }

    pub fn write(&self, airfoil: &Airfoil) -> Result<String> {
        match self {
            AirfoilFormat::Dat => write_dat(airfoil),
            AirfoilFormat::Csv => write_csv(airfoil),
            AirfoilFormat::Json => Ok(serde_json::to_string_pretty(airfoil)?),
        }
    }
}

fn parse_float(token: &str, line: usize) -> Result<f64> {
    token.parse().map_err(|_| AirfoilError::Parse {
        line,
        message: format!("invalid number {:?}", token),
    })
}

pub fn parse_dat(text: &str) -> Result<Airfoil> {
    let mut lines = text
        .lines()
        .enumerate()
        .map(|(i, l)| (i + 1, l.trim()))
        .filter(|(_, l)| !l.is_empty());

    let name = match lines.next() {
        Some((_, header)) => header.trim_start_matches('#').trim().to_string(),
        None => {
            return Err(AirfoilError::Parse {
                line: 1,
                message: "missing name header".to_string(),
            })
        }
    };

    let mut points = Vec::new();
    for (line, row) in lines {
        let tokens: Vec<&str> = row.split_whitespace().collect();
        if tokens.len() != 2 {
            return Err(AirfoilError::Parse {
                line,
                message: format!("expected 2 columns, found {}", tokens.len()),
            });
        }
        points.push(Point2::new(
            parse_float(tokens[0], line)?,
            parse_float(tokens[1], line)?,
        ));
    }

    Airfoil::new(name, points)
}

/// Splits one CSV record, honoring double quoted fields with `""` escapes
fn split_csv_record(record: &str) -> Vec<String> {
    let mut fields = Vec::new();
    let mut field = String::new();
    let mut quoted = false;
    let mut chars = record.chars().peekable();

    while let Some(c) = chars.next() {
        match (c, quoted) {
            ('"', true) if chars.peek() == Some(&'"') => {
                field.push('"');
                chars.next();
            }
            ('"', _) => quoted = !quoted,
            (',', false) => fields.push(std::mem::take(&mut field)),
            _ => field.push(c),
        }
    }
    fields.push(field);

    fields.iter().map(|f| f.trim().to_string()).collect()
}

/// The name goes on a single header line or record, so it may not hold a line break
fn single_line_name(airfoil: &Airfoil) -> Result<&str> {
    let name = airfoil.name();
    if name.contains(['\n', '\r']) {
        return Err(AirfoilError::UnwritableName(name.to_string()));
    }
    Ok(name)
}

fn quote_csv_field(field: &str) -> String {
    if field.contains([',', '"']) {
        format!("\"{}\"", field.replace('"', "\"\""))
    } else {
        field.to_string()
    }
}

pub fn parse_csv(text: &str) -> Result<Airfoil> {
    let mut records = text
        .lines()
        .enumerate()
        .map(|(i, l)| (i + 1, l))
        .filter(|(_, l)| !l.trim().is_empty());

    let header = match records.next() {
        Some((_, h)) => split_csv_record(h),
        None => {
            return Err(AirfoilError::Parse {
                line: 1,
                message: "missing header row".to_string(),
            })
        }
    };

    let column = |name: &str| {
        header
            .iter()
            .position(|h| h.eq_ignore_ascii_case(name))
            .ok_or_else(|| AirfoilError::Parse {
                line: 1,
                message: format!("missing column {:?}", name),
            })
    };
    let (ix, iy, iname) = (column("x")?, column("y")?, column("name")?);

    let mut name = None;
    let mut points = Vec::new();
    for (line, record) in records {
        let fields = split_csv_record(record);
        let field = |i: usize| {
            fields.get(i).ok_or_else(|| AirfoilError::Parse {
                line,
                message: format!("expected {} columns, found {}", header.len(), fields.len()),
            })
        };

        points.push(Point2::new(
            parse_float(field(ix)?, line)?,
            parse_float(field(iy)?, line)?,
        ));
        if name.is_none() {
            name = Some(field(iname)?.clone());
        }
    }

    Airfoil::new(name.unwrap_or_default(), points)
}

pub fn write_dat(airfoil: &Airfoil) -> Result<String> {
    let mut text = String::new();
    writeln!(text, "{}", single_line_name(airfoil)?)?;
    for p in airfoil.points() {
        writeln!(text, "{} {}", p.x, p.y)?;
    }
    Ok(text)
}

pub fn write_csv(airfoil: &Airfoil) -> Result<String> {
    let name = quote_csv_field(single_line_name(airfoil)?);
    let mut text = String::from("x,y,name\n");
    for p in airfoil.points() {
        writeln!(text, "{},{},{}", p.x, p.y, name)?;
    }
    Ok(text)
}

/// The input layout of the DUST solver: the point count, then the points in reverse storage
/// order so that the lower surface comes first. Points are written as stored, without removing a
/// repeated trailing edge.
pub fn write_dust(airfoil: &Airfoil) -> Result<String> {
    let mut text = String::new();
    writeln!(text, "{}", airfoil.len())?;
    for p in airfoil.points().iter().rev() {
        writeln!(text, "{} {}", p.x, p.y)?;
    }
    Ok(text)
}

pub fn load(path: impl AsRef<Path>) -> Result<Airfoil> {
    let path = path.as_ref();
    let format = AirfoilFormat::from_path(path)?;
    log::debug!("loading {} as {:?}", path.display(), format);
    format.parse(&fs::read_to_string(path)?)
}

pub fn save(airfoil: &Airfoil, path: impl AsRef<Path>) -> Result<()> {
    let path = path.as_ref();
    let format = AirfoilFormat::from_path(path)?;
    log::debug!("saving {:?} to {} as {:?}", airfoil.name(), path.display(), format);
    fs::write(path, format.write(airfoil)?)?;
    Ok(())
}

pub fn save_dust(airfoil: &Airfoil, path: impl AsRef<Path>) -> Result<()> {
    fs::write(path, write_dust(airfoil)?)?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::airfoil::tests::{diamond, lens};
    use std::path::PathBuf;
    use test_case::test_case;

    fn temp_path(file_name: &str) -> PathBuf {
        std::env::temp_dir().join(format!("airfoil-geom-{}-{}", std::process::id(), file_name))
    }

    #[test_case("wing.dat", AirfoilFormat::Dat)]
    #[test_case("wing.CSV", AirfoilFormat::Csv)]
    #[test_case("a/b/wing.json", AirfoilFormat::Json)]
    fn test_format_from_path(path: &str, e: AirfoilFormat) {
        assert_eq!(e, AirfoilFormat::from_path(Path::new(path)).unwrap());
    }

    #[test_case("wing.txt")]
    #[test_case("wing")]
    fn test_unsupported_format(path: &str) {
        assert!(matches!(
            AirfoilFormat::from_path(Path::new(path)),
            Err(AirfoilError::UnsupportedFormat(_))
        ));
        assert!(matches!(
            save(&diamond(), path),
            Err(AirfoilError::UnsupportedFormat(_))
        ));
    }

    #[test]
    fn test_parse_dat() {
        let text = "# NACA 0012 \n\n 1.0  0.0\n0.5 0.05\n0.0 0.0\n0.5 -0.05\n";
        let af = parse_dat(text).unwrap();
        assert_eq!("NACA 0012", af.name());
        assert_eq!(vec![1.0, 0.5, 0.0, 0.5], af.x());
        assert_eq!(vec![0.0, 0.05, 0.0, -0.05], af.y());
    }

    #[test]
    fn test_parse_dat_bad_row() {
        let text = "foil\n1.0 0.0\n0.5\n0.0 0.0\n";
        assert!(matches!(
            parse_dat(text),
            Err(AirfoilError::Parse { line: 3, .. })
        ));
        assert!(matches!(
            parse_dat("foil\n1.0 zero\n"),
            Err(AirfoilError::Parse { line: 2, .. })
        ));
    }

    #[test]
    fn test_parse_csv_any_column_order() {
        let text = "name,y,x\nfoil,0.0,1.0\nother,0.1,0.0\nfoil,0.0,-1.0\nfoil,-0.1,0.0\n";
        let af = parse_csv(text).unwrap();
        assert_eq!("foil", af.name());
        assert_eq!(diamond().points(), af.points());
    }

    #[test]
    fn test_csv_quoted_name() {
        let mut af = diamond();
        af.set_name("root, \"outboard\"");
        let back = parse_csv(&write_csv(&af).unwrap()).unwrap();
        assert_eq!(af, back);
    }

    #[test_case("root\nsection")]
    #[test_case("root\r\nsection")]
    fn test_rejects_line_break_in_name(name: &str) {
        let mut af = diamond();
        af.set_name(name);
        assert!(matches!(
            write_csv(&af),
            Err(AirfoilError::UnwritableName(_))
        ));
        assert!(matches!(
            write_dat(&af),
            Err(AirfoilError::UnwritableName(_))
        ));
        assert!(matches!(
            save(&af, temp_path("line_break.csv")),
            Err(AirfoilError::UnwritableName(_))
        ));
    }

    #[test]
    fn test_parse_csv_missing_column() {
        assert!(matches!(
            parse_csv("x,y\n1.0,0.0\n"),
            Err(AirfoilError::Parse { line: 1, .. })
        ));
    }

    #[test]
    fn test_write_dust_reverses() {
        let af = Airfoil::from_xy("tri", &[0.0, 1.0, 2.0], &[0.0, 1.0, 0.0]).unwrap();
        assert_eq!("3\n2 0\n1 1\n0 0\n", write_dust(&af).unwrap());
    }

    #[test_case("round_trip.dat")]
    #[test_case("round_trip.csv")]
    #[test_case("round_trip.json")]
    fn test_file_round_trip(file_name: &str) {
        let path = temp_path(file_name);
        let af = lens(7);
        save(&af, &path).unwrap();
        let back = load(&path).unwrap();
        fs::remove_file(&path).unwrap();
        assert_eq!(af, back);
    }

    #[test]
    fn test_save_dust_file() {
        let path = temp_path("dust.dat");
        save_dust(&diamond(), &path).unwrap();
        let text = fs::read_to_string(&path).unwrap();
        fs::remove_file(&path).unwrap();
        assert_eq!("4\n0 -0.1\n-1 0\n0 0.1\n1 0\n", text);
    }

    #[test]
    fn test_load_missing_file() {
        assert!(matches!(
            load(temp_path("missing.dat")),
            Err(AirfoilError::Io(_))
        ));
    }
}
