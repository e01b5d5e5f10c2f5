//! Rules every environment starts with
//!
//! Seeded into the rule list in this order: babel, css, file.

use serde_json::json;

use crate::error::Result;
use crate::pipeline::pattern::MatchPattern;
use crate::pipeline::rule::{LoaderOptions, LoaderRule, UseEntry};

/// Script sources routed through the transpiler with a warm cache
pub fn babel() -> Result<LoaderRule> {
    Ok(LoaderRule::new(MatchPattern::new(r"\.(js|mjs|jsx)$")?).with_step(
        UseEntry::new("babel-loader")
            .with_options(LoaderOptions::Raw(json!({"cacheDirectory": true}))),
    ))
}

/// Stylesheets injected into the page after extraction
pub fn css() -> Result<LoaderRule> {
    Ok(LoaderRule::new(MatchPattern::new(r"\.css$")?)
        .with_step(UseEntry::new("style-loader"))
        .with_step(UseEntry::new("css-loader")))
}

/// Static assets copied to the output directory under fingerprinted names
pub fn file() -> Result<LoaderRule> {
    Ok(
        LoaderRule::new(MatchPattern::new(r"\.(png|jpe?g|gif|svg|eot|otf|ttf|woff2?)$")?)
            .with_step(UseEntry::new("file-loader").with_options(LoaderOptions::Raw(
                json!({"name": "media/[name]-[contenthash].[ext]"}),
            ))),
    )
}

/// All base rules in registration order
pub fn all() -> Result<Vec<LoaderRule>> {
    Ok(vec![babel()?, css()?, file()?])
}
