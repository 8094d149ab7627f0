//! Bottom-up generation over an entity tree.

use crate::generators::{self, style_snapshot};
use crate::metadata::{MetadataRecord, MetadataStore};
use crate::options::GeneratorOptions;
use trellis_core::{Entity, Platform};
use trellis_style::vocabulary;

type PendingRecords = Vec<(String, MetadataRecord)>;

/// Generates markup for whole entity trees.
#[derive(Debug, Clone, Default)]
pub struct TreeGenerator {
    options: GeneratorOptions,
}

impl TreeGenerator {
    /// Create a generator with options.
    pub fn new(options: GeneratorOptions) -> Self {
        Self { options }
    }

    /// Create a generator with default options for a platform.
    pub fn for_platform(platform: Platform) -> Self {
        Self::new(GeneratorOptions::for_platform(platform))
    }

    /// Options in use.
    pub fn options(&self) -> &GeneratorOptions {
        &self.options
    }

    /// Generate markup for the tree rooted at `root`.
    pub fn generate(&self, root: &Entity) -> String {
        self.render(root, None)
    }

    /// Generate markup and record every visited entity in a new snapshot
    /// of `store`.
    pub fn generate_with_metadata(&self, root: &Entity, store: &MetadataStore) -> (String, MetadataStore) {
        let mut records = PendingRecords::new();
        let markup = self.render(root, Some(&mut records));
        log::debug!("recorded metadata for {} entities", records.len());
        (markup, store.batch_update(records))
    }

    fn render(&self, entity: &Entity, mut records: Option<&mut PendingRecords>) -> String {
        let platform = self.options.platform;

        if self.options.audit_classes {
            self.audit(entity);
        }

        let mut children = Vec::new();
        if entity.kind.is_container() {
            for child in &entity.children {
                children.push(self.render(child, records.as_deref_mut()));
            }
        } else if !entity.children.is_empty() {
            log::warn!(
                "ignoring {} children of {} '{}'",
                entity.children.len(),
                entity.kind,
                entity.id
            );
        }

        let markup = generators::generate(entity, &children, platform);

        if let Some(records) = records {
            let element = generators::lookup(entity.kind, platform)
                .and_then(|entry| entry.element)
                .map(str::to_string)
                .unwrap_or_else(|| entity.kind.display_name());
            records.push((
                entity.id.clone(),
                MetadataRecord::new(markup.clone(), style_snapshot(entity, platform), element),
            ));
        }

        markup
    }

    fn audit(&self, entity: &Entity) {
        let unknown = vocabulary::unknown_tokens(entity.kind, &entity.classes);
        if !unknown.is_empty() {
            log::debug!(
                "{} '{}' uses classes outside its vocabulary: {}",
                entity.kind,
                entity.id,
                unknown.join(" ")
            );
        }
    }
}
