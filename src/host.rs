//! JSON line protocol for headless hosts.
//!
//! Each request line maps to one `Command`; each produces one `Response`.
//!
//! ```text
//! {"cmd":"place","index":0,"path":"cat.png"}
//! {"cmd":"place","index":1,"data":"<base64>"}
//! {"cmd":"duplicate","index":1}
//! {"cmd":"remove","index":0}
//! {"cmd":"compose","title":"Pets"}
//! ```

use std::path::{Path, PathBuf};

use anyhow::Context;
use base64::Engine as _;
use log::error;
use serde::{Deserialize, Serialize};

use crate::{Command, Error, GridComposer, Outcome};

#[derive(Debug, Deserialize)]
#[serde(tag = "cmd", rename_all = "snake_case")]
pub enum Request {
    Place {
        index: usize,
        path: Option<PathBuf>,
        data: Option<String>,
    },
    Duplicate {
        index: usize,
    },
    Remove {
        index: usize,
    },
    Compose {
        #[serde(default)]
        title: String,
    },
}

#[derive(Debug, Serialize)]
pub struct Response {
    pub ok: bool,
    pub message: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub file: Option<String>,
    pub has_any_image: bool,
}

impl Response {
    fn failure(message: String, composer: &GridComposer) -> Self {
        Self {
            ok: false,
            message,
            file: None,
            has_any_image: composer.has_any_image(),
        }
    }
}

/// Read the bytes a place request refers to. Unreadable input is reported
/// the same way as undecodable input.
pub fn request_bytes(path: Option<PathBuf>, data: Option<String>) -> Result<Vec<u8>, Error> {
    match (path, data) {
        (Some(p), _) => std::fs::read(&p)
            .map_err(|e| Error::InvalidImageData(format!("{}: {}", p.display(), e))),
        (None, Some(d)) => base64::engine::general_purpose::STANDARD
            .decode(d.trim())
            .map_err(|e| Error::InvalidImageData(e.to_string())),
        (None, None) => Err(Error::InvalidImageData("request has neither path nor data".into())),
    }
}

/// Apply one request. User errors become a failed `Response`; only host I/O
/// failures (writing the composite) are returned as `Err`.
pub async fn handle_request(
    composer: &mut GridComposer,
    req: Request,
    out_dir: &Path,
) -> anyhow::Result<Response> {
    let command = match req {
        Request::Place { index, path, data } => composer
            .check_vacant(index)
            .and_then(|_| request_bytes(path, data))
            .map(|bytes| Command::Place { index, bytes }),
        Request::Duplicate { index } => Ok(Command::Duplicate { index }),
        Request::Remove { index } => Ok(Command::Remove { index }),
        Request::Compose { title } => Ok(Command::Compose { title }),
    };
    let result = match command {
        Ok(cmd) => composer.dispatch_async(cmd).await,
        Err(e) => Err(e),
    };

    let mut file = None;
    if let Ok(Outcome::Composed(c)) = &result {
        let path = out_dir.join(&c.file_name);
        std::fs::write(&path, &c.png_data)
            .with_context(|| format!("writing {}", path.display()))?;
        file = Some(path.display().to_string());
    }

    Ok(Response {
        ok: result.is_ok(),
        message: match &result {
            Ok(outcome) => outcome.status_message(),
            Err(e) => e.to_string(),
        },
        file,
        has_any_image: composer.has_any_image(),
    })
}

/// Parse and apply one protocol line; never fails.
pub async fn handle_line(composer: &mut GridComposer, line: &str, out_dir: &Path) -> Response {
    match serde_json::from_str::<Request>(line) {
        Ok(req) => match handle_request(composer, req, out_dir).await {
            Ok(r) => r,
            Err(e) => {
                error!("{:#}", e);
                Response::failure(format!("{:#}", e), composer)
            }
        },
        Err(e) => Response::failure(format!("malformed request: {}", e), composer),
    }
}
