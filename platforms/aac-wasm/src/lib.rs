use wasm_bindgen::prelude::*;
use aac_protocol::{Catalog, ItemId, ItemKind, VocabularyItem};
use aac_composer::{check_selection, render, validate, Board, CatalogError, SelectionIssue};
use serde::Serialize;

#[wasm_bindgen]
pub fn init_panic_hook() {
    console_error_panic_hook::set_once();
}

/// The structured response sent back to the sentence bar
#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ComposeReport {
    pub text: String,
    pub complete: bool,
    pub auto_speak: bool,
    pub words: Vec<String>,
    pub issues: Vec<SerializableIssue>,
}

#[derive(Debug, Serialize)]
pub struct SerializableIssue {
    pub source: String,
    pub target: String,
    pub message: String,
}

impl From<SelectionIssue> for SerializableIssue {
    fn from(issue: SelectionIssue) -> Self {
        Self {
            source: issue.source,
            target: issue.target,
            message: issue.details,
        }
    }
}

fn js_error(err: impl std::fmt::Display) -> JsValue {
    JsValue::from_str(&err.to_string())
}

/// Reads a compiled catalog (as fetched by the page) into owned data.
fn load_catalog(data: &[u8]) -> Result<Catalog, String> {
    // fetch() buffers carry no alignment guarantee
    let mut aligned = rkyv::AlignedVec::with_capacity(data.len());
    aligned.extend_from_slice(data);

    let catalog = rkyv::from_bytes::<Catalog>(&aligned)
        .map_err(|e| format!("invalid catalog archive: {:?}", e))?;
    validate(&catalog).map_err(|e| e.to_string())?;
    Ok(catalog)
}

/// The board engine running in the browser
#[wasm_bindgen]
pub struct AacEngine {
    board: Board,
}

impl AacEngine {
    fn from_bytes(data: &[u8]) -> Result<Self, String> {
        Ok(Self { board: Board::new(load_catalog(data)?) })
    }

    fn report(&self, ids: &[String]) -> Result<ComposeReport, CatalogError> {
        let items = self.board.resolve(ids)?;
        let rendered = render(&items);

        Ok(ComposeReport {
            words: rendered.words().collect(),
            auto_speak: rendered.should_auto_speak(),
            complete: rendered.complete,
            text: rendered.text,
            issues: check_selection(&items).into_iter().map(Into::into).collect(),
        })
    }
}

#[wasm_bindgen]
impl AacEngine {
    #[wasm_bindgen(constructor)]
    pub fn new(data: Vec<u8>) -> Result<AacEngine, JsValue> {
        Self::from_bytes(&data).map_err(|e| JsValue::from_str(&e))
    }

    /// Tiles for one tab (`"subject"`, `"verb"`, ..., `"phrase"`) up to `level`.
    #[wasm_bindgen(js_name = visibleItems)]
    pub fn visible_items(&self, kind: &str, level: u8) -> Result<JsValue, JsValue> {
        let kind: ItemKind = kind.parse().map_err(js_error)?;
        let items = self.board.visible(kind, level);
        Ok(serde_wasm_bindgen::to_value(&items)?)
    }

    #[wasm_bindgen(js_name = setOverride)]
    pub fn set_override(&mut self, item: JsValue) -> Result<(), JsValue> {
        let item: VocabularyItem = serde_wasm_bindgen::from_value(item)?;
        self.board.set_override(item).map_err(js_error)
    }

    #[wasm_bindgen(js_name = resetOverride)]
    pub fn reset_override(&mut self, id: &str) -> bool {
        self.board.reset_override(&ItemId::from(id)).is_some()
    }

    /// Text -> ids -> items -> sentence, as JSON for the UI
    pub fn compose(&self, ids: Vec<String>) -> Result<JsValue, JsValue> {
        let report = self.report(&ids).map_err(js_error)?;
        Ok(serde_wasm_bindgen::to_value(&report)?)
    }
}
