//! End-to-end generation from editor JSON.

use trellis_codegen::{
    Exporter, GeneratorOptions, MetadataRecord, MetadataStore, Platform, TreeGenerator,
};
use trellis_core::Entity;

const PROFILE_TREE: &str = r#"{
    "id": "profile",
    "kind": "Page",
    "classes": ["flex-col", "items-center", "p-[24px]"],
    "children": [
        {
            "id": "avatar",
            "kind": "Image",
            "properties": { "src": "/me.png", "alt": "Me" },
            "classes": ["w-24", "h-24", "rounded-full"]
        },
        {
            "id": "name",
            "kind": "Text",
            "properties": { "text": "Ada Lovelace" },
            "classes": ["text-xl", "font-semibold"]
        },
        {
            "id": "links",
            "kind": "List",
            "children": [
                { "id": "site", "kind": "Link", "properties": { "href": "/ada", "text": "Website" } }
            ]
        }
    ]
}"#;

#[test]
fn test_web_profile() {
    let tree = Entity::from_json(PROFILE_TREE).unwrap();
    let markup = TreeGenerator::for_platform(Platform::Web).generate(&tree);

    insta::assert_snapshot!(markup, @r#"
    <main className="flex-col items-center p-[24px]">
      <img className="w-24 h-24 rounded-full" src="/me.png" alt="Me" />
      <p className="text-xl font-semibold">Ada Lovelace</p>
      <ul>
        <a href="/ada">Website</a>
      </ul>
    </main>
    "#);
}

#[test]
fn test_native_profile() {
    let tree = Entity::from_json(PROFILE_TREE).unwrap();
    let markup = TreeGenerator::for_platform(Platform::Native).generate(&tree);

    insta::assert_snapshot!(markup, @r#"
    <ScrollView style={{ flexDirection: "column", alignItems: "center", padding: 24 }}>
      <Image style={{ width: 96, height: 96, borderRadius: 9999 }} source={{ uri: "/me.png" }} accessibilityLabel="Me" />
      <Text style={{ fontSize: 20, fontWeight: "600" }}>Ada Lovelace</Text>
      not implemented yet
    </ScrollView>
    "#);
}

#[test]
fn test_generation_is_deterministic() {
    let tree = Entity::from_json(PROFILE_TREE).unwrap();
    for platform in Platform::ALL {
        let generator = TreeGenerator::for_platform(platform);
        assert_eq!(generator.generate(&tree), generator.generate(&tree));
    }
}

#[test]
fn test_metadata_invalidation_flow() {
    let tree = Entity::from_json(PROFILE_TREE).unwrap();
    let generator = TreeGenerator::for_platform(Platform::Web);

    let fresh = MetadataStore::new().sync("draft", MetadataRecord::initialize("div"));
    let (_, generated) = generator.generate_with_metadata(&tree, &fresh);
    assert_eq!(generated.len(), 6);
    assert_eq!(generated.get("name").unwrap().react_code, r#"<p className="text-xl font-semibold">Ada Lovelace</p>"#);

    // Editing an entity invalidates its cached record.
    let invalidated = generated.remove("name");
    assert!(!invalidated.has("name"));
    assert!(generated.has("name"));

    // Regenerating restores it.
    let (_, regenerated) = generator.generate_with_metadata(&tree, &invalidated);
    assert_eq!(regenerated.get("name"), generated.get("name"));
    assert_eq!(MetadataStore::clear().len(), 0);
}

#[test]
fn test_export_from_json_options() {
    let tree = Entity::from_json(PROFILE_TREE).unwrap();
    let options = GeneratorOptions::from_json(r#"{ "platform": "native", "componentName": "profile-screen" }"#).unwrap();
    let file = Exporter::new(options).unwrap().export(&tree).unwrap();

    assert_eq!(file.path, "src/screens/ProfileScreen.tsx");
    assert!(file
        .content
        .contains("import { Image, ScrollView, Text } from 'react-native';"));
    assert!(file.content.contains("export default function ProfileScreen() {"));
}
