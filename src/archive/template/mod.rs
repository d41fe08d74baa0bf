pub mod render;

pub use render::Renderer;

use crate::error::Result;
use std::{fs, path::Path};

/// Layout of a generated solution file, in handlebars syntax. Follows the
/// header of the vscode-leetcode extension (`[id] title`, newline terminated)
/// so archived files open as problems there.
pub const DEFAULT_TEMPLATE: &str = "{{block_open}}
{{block_line}} @lc app=leetcode id={{id}} lang={{lang}}
{{block_line}}
{{block_line}} [{{id}}] {{title}}
{{block_close}}

{{comment}} @lc code=start
{{code}}
{{comment}} @lc code=end
";

pub struct Template {
    pub content: String,
}
impl Template {
    pub fn from_path<P: AsRef<Path>>(path: P) -> Result<Self> {
        Ok(Template {
            content: fs::read_to_string(path)?,
        })
    }
}
impl Default for Template {
    fn default() -> Self {
        Template {
            content: DEFAULT_TEMPLATE.to_string(),
        }
    }
}
