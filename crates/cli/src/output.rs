use anyhow::{Context, Result};
use serde::Serialize;
use serde_json::Value;
use std::fs;
use std::io::Write;
use std::path::{Path, PathBuf};
use vecla::Matrix;

/// A subcommand result in both output forms.
pub struct Rendered {
    pub text: String,
    pub json: Value,
}

/// Where and how a subcommand renders its result.
pub struct Emit {
    pub json: bool,
    pub out: Option<PathBuf>,
}

impl Emit {
    pub fn new(json: bool, out: Option<String>) -> Self {
        Self {
            json,
            out: out.map(PathBuf::from),
        }
    }

    /// Select the text or JSON form and write it to the file or stdout.
    pub fn write(&self, r: &Rendered) -> Result<()> {
        let body = if self.json {
            let mut s = serde_json::to_string_pretty(&r.json)?;
            s.push('\n');
            s
        } else {
            r.text.clone()
        };
        match &self.out {
            Some(path) => write_file(path, &body),
            None => {
                std::io::stdout()
                    .lock()
                    .write_all(body.as_bytes())
                    .context("writing stdout")?;
                Ok(())
            }
        }
    }
}

fn write_file(path: &Path, body: &str) -> Result<()> {
    if let Some(parent) = path.parent() {
        if !parent.as_os_str().is_empty() {
            fs::create_dir_all(parent)
                .with_context(|| format!("creating output dir {}", parent.display()))?;
        }
    }
    fs::write(path, body).with_context(|| format!("writing {}", path.display()))?;
    tracing::info!(path = %path.display(), bytes = body.len(), "wrote output");
    Ok(())
}

/// Matrix as three rows, for JSON output.
#[derive(Serialize)]
pub struct Rows([[f64; 3]; 3]);

pub fn matrix_json(m: &Matrix) -> Rows {
    Rows([m.row(0), m.row(1), m.row(2)])
}

/// Matrix as three whitespace-separated rows.
pub fn matrix_text(m: &Matrix) -> String {
    (0..3)
        .map(|i| {
            let [a, b, c] = m.row(i);
            format!("{a} {b} {c}\n")
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;
    use tempfile::tempdir;
    use vecla::matrix::translation;

    #[test]
    fn text_rows_follow_layout() {
        let s = matrix_text(&translation(10.0, -2.5));
        assert_eq!(s, "1 0 10\n0 1 -2.5\n0 0 1\n");
    }

    #[test]
    fn json_rows_follow_layout() {
        let v = serde_json::to_value(matrix_json(&translation(3.0, 4.0))).unwrap();
        assert_eq!(v, json!([[1.0, 0.0, 3.0], [0.0, 1.0, 4.0], [0.0, 0.0, 1.0]]));
    }

    #[test]
    fn write_creates_parent_dirs() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("nested/out/m.json");
        let emit = Emit::new(true, Some(path.to_string_lossy().into_owned()));
        let r = Rendered {
            text: "ignored\n".into(),
            json: json!({"det": 1.0}),
        };
        emit.write(&r).unwrap();
        let parsed: Value = serde_json::from_slice(&fs::read(&path).unwrap()).unwrap();
        assert_eq!(parsed["det"], 1.0);
    }

    #[test]
    fn text_mode_writes_plain_body() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("m.txt");
        let emit = Emit::new(false, Some(path.to_string_lossy().into_owned()));
        let r = Rendered {
            text: "hello\n".into(),
            json: json!({"ignored": true}),
        };
        emit.write(&r).unwrap();
        assert_eq!(fs::read_to_string(&path).unwrap(), "hello\n");
    }
}
