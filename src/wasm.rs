use crate::{board::Board, partition::UnionScript};
use serde::{Deserialize, Serialize};
use tsify::Tsify;
use wasm_bindgen::prelude::*;

/// CamelCase for JS/TS
#[allow(non_snake_case)]
mod ts_interface {

    use super::*;

    pub type Result<T, E = JsError> = std::result::Result<T, E>;

    #[derive(Tsify, Debug, Clone, Serialize, Deserialize)]
    #[tsify(into_wasm_abi, from_wasm_abi)]
    pub struct UnionScriptJson {
        pub elements: Vec<String>,
        pub unions: Vec<(String, String)>,
    }

    impl From<UnionScriptJson> for UnionScript<String> {
        fn from(json: UnionScriptJson) -> Self {
            Self {
                elements: json.elements,
                unions: json.unions,
            }
        }
    }

    #[derive(Tsify, Serialize, Deserialize)]
    #[tsify(into_wasm_abi, from_wasm_abi)]
    pub struct UnionGroupsResult {
        pub groups: Vec<Vec<String>>,
        pub rejected: Vec<(String, String)>,
        pub markdown: String,
    }

    /// Apply every union and return the resulting groups
    /// Throws when an element is listed twice
    #[wasm_bindgen]
    pub fn unionGroups(script: UnionScriptJson) -> Result<UnionGroupsResult> {
        let script: UnionScript<String> = script.into();
        let outcome = script.apply().map_err(JsError::from)?;
        let markdown = outcome.partition.to_markdown(
            "Groups",
            &format!("{} groups over {} elements.", outcome.partition.len(), script.elements.len()),
        );
        Ok(UnionGroupsResult {
            groups: outcome.partition.groups,
            rejected: outcome.rejected,
            markdown,
        })
    }

    /// Test if two elements end up in the same group
    /// Returns false if either element is unknown
    #[wasm_bindgen]
    pub fn sameGroup(script: UnionScriptJson, a: &str, b: &str) -> Result<bool> {
        let script: UnionScript<String> = script.into();
        let mut set = script.disjoint_set().map_err(JsError::from)?;
        Ok(set.same(&a.to_string(), &b.to_string()))
    }

    /// JSON of the standard 37-ring board
    #[wasm_bindgen]
    pub fn defaultBoard() -> String {
        Board::new().to_json()
    }

    /// Draw a board given as JSON
    #[wasm_bindgen]
    pub fn boardToText(board: &str) -> Result<String> {
        let board = Board::from_json(board).map_err(JsError::from)?;
        Ok(board.to_string())
    }
}
pub use ts_interface::UnionScriptJson;
