//! Export a component tree as a source file.

use crate::error::{CodegenError, Result};
use crate::generators::{self, TemplateEngine, COMPONENT_TEMPLATE};
use crate::metadata::MetadataStore;
use crate::options::GeneratorOptions;
use crate::tree::TreeGenerator;
use convert_case::{Case, Casing};
use serde::Serialize;
use std::collections::BTreeSet;
use trellis_core::{Entity, Platform};

const BODY_INDENT: &str = "    ";

/// A generated file.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GeneratedFile {
    /// File path relative to project root.
    pub path: String,
    /// File content.
    pub content: String,
}

#[derive(Serialize)]
struct ComponentContext<'a> {
    name: &'a str,
    imports: String,
    body: String,
}

/// Wraps generated markup into an exported function component.
pub struct Exporter<'a> {
    generator: TreeGenerator,
    engine: TemplateEngine<'a>,
}

impl<'a> Exporter<'a> {
    /// Create an exporter.
    pub fn new(options: GeneratorOptions) -> Result<Self> {
        Ok(Self {
            generator: TreeGenerator::new(options),
            engine: TemplateEngine::new()?,
        })
    }

    /// Export the tree rooted at `root`.
    pub fn export(&self, root: &Entity) -> Result<GeneratedFile> {
        let markup = self.generator.generate(root);
        self.render_file(root, &markup)
    }

    /// Export and record metadata for every entity in a new snapshot.
    pub fn export_with_metadata(
        &self,
        root: &Entity,
        store: &MetadataStore,
    ) -> Result<(GeneratedFile, MetadataStore)> {
        let (markup, next) = self.generator.generate_with_metadata(root, store);
        let file = self.render_file(root, &markup)?;
        Ok((file, next))
    }

    fn render_file(&self, root: &Entity, markup: &str) -> Result<GeneratedFile> {
        let options = self.generator.options();
        let name = component_name(&options.component_name)?;

        let context = ComponentContext {
            name: &name,
            imports: import_line(root, options.platform),
            body: markup
                .lines()
                .map(|line| {
                    if line.is_empty() {
                        String::new()
                    } else {
                        format!("{}{}", BODY_INDENT, line)
                    }
                })
                .collect::<Vec<_>>()
                .join("\n"),
        };
        let content = self.engine.render(COMPONENT_TEMPLATE, &context)?;

        let dir = match options.platform {
            Platform::Web => "src/components",
            Platform::Native => "src/screens",
        };
        let ext = if options.use_typescript { "tsx" } else { "jsx" };

        log::debug!("exported {} for {}", name, options.platform);
        Ok(GeneratedFile {
            path: format!("{}/{}.{}", dir, name, ext),
            content,
        })
    }
}

fn component_name(raw: &str) -> Result<String> {
    let name = raw.to_case(Case::Pascal);
    match name.chars().next() {
        Some(first) if first.is_ascii_alphabetic() => Ok(name),
        _ => Err(CodegenError::InvalidComponentName(raw.to_string())),
    }
}

/// React Native components referenced by the rendered part of a tree.
pub fn native_imports(root: &Entity) -> BTreeSet<&'static str> {
    let mut imports = BTreeSet::new();
    collect_native_imports(root, &mut imports);
    imports
}

/// Unported kinds discard their children, and leaf kinds never render them.
fn collect_native_imports(entity: &Entity, imports: &mut BTreeSet<&'static str>) {
    let Some(entry) = generators::lookup(entity.kind, Platform::Native) else {
        return;
    };
    let Some(element) = entry.element else {
        return;
    };
    imports.insert(element);
    imports.extend(entry.imports.iter().copied());

    if !entity.kind.is_container() {
        return;
    }
    if entity.children.is_empty() {
        imports.insert(generators::NATIVE_PLACEHOLDER_ELEMENT);
    }
    for child in &entity.children {
        collect_native_imports(child, imports);
    }
}

fn import_line(root: &Entity, platform: Platform) -> String {
    match platform {
        Platform::Web => String::new(),
        Platform::Native => {
            let imports = native_imports(root);
            if imports.is_empty() {
                String::new()
            } else {
                format!(
                    "import {{ {} }} from 'react-native';\n",
                    imports.into_iter().collect::<Vec<_>>().join(", ")
                )
            }
        }
    }
}
