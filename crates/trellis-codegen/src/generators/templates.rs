//! Template engine for exported component files.

use crate::error::{CodegenError, Result};
use handlebars::Handlebars;
use serde::Serialize;

/// Name of the component file template.
pub const COMPONENT_TEMPLATE: &str = "component";

const COMPONENT_SOURCE: &str = "import React from 'react';
{{{imports}}}
export default function {{name}}() {
  return (
{{{body}}}
  );
}
";

/// Template engine using Handlebars.
pub struct TemplateEngine<'a> {
    handlebars: Handlebars<'a>,
}

impl<'a> TemplateEngine<'a> {
    /// Create an engine with the built-in templates registered.
    pub fn new() -> Result<Self> {
        let mut engine = Self {
            handlebars: Handlebars::new(),
        };
        engine.handlebars.set_strict_mode(true);
        engine.register_template(COMPONENT_TEMPLATE, COMPONENT_SOURCE)?;
        Ok(engine)
    }

    /// Register a template, replacing any with the same name.
    pub fn register_template(&mut self, name: &str, template: &str) -> Result<()> {
        self.handlebars
            .register_template_string(name, template)
            .map_err(CodegenError::InvalidTemplate)?;
        Ok(())
    }

    /// Render a template.
    pub fn render<T: Serialize>(&self, name: &str, data: &T) -> Result<String> {
        self.handlebars
            .render(name, data)
            .map_err(CodegenError::TemplateError)
    }

    /// Check if a template is registered.
    pub fn has_template(&self, name: &str) -> bool {
        self.handlebars.has_template(name)
    }
}
