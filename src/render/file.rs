use tera::{Context, Tera};

use crate::error::{MsgenError, Result};

/// Render a single template body with its job's context.
pub fn render_file_content(name: &str, content: &str, context: &Context) -> Result<String> {
    let render_err = |e| MsgenError::RenderError {
        file: name.to_string(),
        source: e,
    };

    let mut tera = Tera::default();
    // Output is source code, never HTML.
    tera.autoescape_on(Vec::new());
    tera.add_raw_template(name, content).map_err(render_err)?;
    tera.render(name, context).map_err(render_err)
}
