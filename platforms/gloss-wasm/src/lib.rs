use gloss_align::{Gloss, GlossFile};
use serde::Serialize;
use wasm_bindgen::prelude::*;

#[wasm_bindgen]
pub fn init_panic_hook() {
    console_error_panic_hook::set_once();
}

/// One faulty gloss block, shaped for the browser UI's warning list.
#[derive(Serialize)]
pub struct GlossWarning {
    pub lines: String,
    pub message: String,
}

impl From<&Gloss> for GlossWarning {
    fn from(gloss: &Gloss) -> Self {
        Self {
            lines: gloss.to_string(),
            message: gloss.error().map(ToString::to_string).unwrap_or_default(),
        }
    }
}

/// The structured response sent back to JavaScript
#[derive(Serialize)]
pub struct FormatReport {
    pub output: String,
    pub warnings: Vec<GlossWarning>,
    pub gloss_count: usize,
}

/// Reformat a whole Toolbox document held in memory.
///
/// The browser side owns the file-open and file-save dialogs; this
/// boundary takes the decoded text and hands back the realigned document
/// plus the warning list to display.
#[wasm_bindgen]
pub fn reformat(input: &str) -> JsValue {
    let lines: Vec<String> = input
        .lines()
        .map(|line| line.trim_end().to_string())
        .collect();

    let file = GlossFile::parse(lines);

    let warnings: Vec<GlossWarning> = file
        .glosses()
        .filter(|gloss| gloss.is_faulty())
        .map(GlossWarning::from)
        .collect();

    let report = FormatReport {
        output: file.to_string(),
        warnings,
        gloss_count: file.glosses().count(),
    };

    serde_wasm_bindgen::to_value(&report).unwrap()
}
