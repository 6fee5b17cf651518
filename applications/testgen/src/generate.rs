//! Test generation: prompt assembly, completion, and file output.

use std::path::{Path, PathBuf};

use tokio::fs;
use tracing::info;

use crate::client::CompletionClient;
use crate::error::{Result, TestgenError};

/// Generate a contract test draft for one consumer source file.
///
/// Reads `source` and `template`, prompts the model, strips any markdown
/// fences from the reply, and writes the result to
/// `{out_dir}/generated_{source_stem}.rs`. Returns the written path.
pub async fn generate_tests(
    client: &dyn CompletionClient,
    source: &Path,
    template: &Path,
    out_dir: &Path,
) -> Result<PathBuf> {
    let stem = source
        .file_stem()
        .and_then(|stem| stem.to_str())
        .ok_or_else(|| TestgenError::InvalidSource(source.display().to_string()))?;

    let source_code = fs::read_to_string(source).await?;
    let template_code = fs::read_to_string(template).await?;

    let prompt = build_prompt(&source_code, &template_code);
    let reply = client.complete(&prompt).await?;
    let code = strip_code_fences(&reply);

    fs::create_dir_all(out_dir).await?;
    let out_path = out_dir.join(format!("generated_{stem}.rs"));
    fs::write(&out_path, &code).await?;

    info!(path = %out_path.display(), "Generated test file");
    Ok(out_path)
}

/// Build the single-message prompt sent to the model.
pub fn build_prompt(source_code: &str, template_code: &str) -> String {
    format!(
        "Please generate unit tests for the following Rust source code.\n\
         Reply with valid Rust code only. Do not include explanations or any other \
         non-code text, and do not wrap the code in markdown fences like ```rust \
         and ```.\n\n\
         The tests are contract tests: they pin provider interactions with a \
         wiremock mock server. Use the same libraries and layout as this reference \
         test file:\n'''\n{template_code}\n'''\n\n\
         Take note:\n\
         1. Format the code the way rustfmt would.\n\
         2. Import the types under test from the `roster_client` crate, for example \
         `use roster_client::{{Company, CompanyConsumer}};`.\n\n\
         Source code:\n'''\n{source_code}\n'''\n"
    )
}

/// Drop a leading and trailing markdown code fence, if present.
///
/// Models add them no matter what the prompt says. Anything else in the
/// reply is kept as-is; the output always ends with a newline.
pub fn strip_code_fences(reply: &str) -> String {
    let mut lines: Vec<&str> = reply.trim().lines().collect();
    if lines
        .first()
        .is_some_and(|line| line.trim_start().starts_with("```"))
    {
        lines.remove(0);
    }
    if lines.last().is_some_and(|line| line.trim() == "```") {
        lines.pop();
    }

    let mut code = lines.join("\n");
    if !code.ends_with('\n') {
        code.push('\n');
    }
    code
}
