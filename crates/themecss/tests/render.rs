use proptest::prelude::*;
use serde_json::{json, Value};
use themecss::{
    check_stylesheet, extract_style_nodes, render_custom_properties, render_global_styles,
    render_styles, BlockSelector, BlockSelectorMap, RenderOptions, StyleTree,
};

fn heading_selectors() -> BlockSelectorMap {
    BlockSelectorMap::new().add(
        "core/heading",
        BlockSelector::with_default_elements("h1,h2,h3,h4,h5,h6")
            .add_element("h1", "h1")
            .add_element("h2", "h2"),
    )
}

#[test]
fn test_heading_nodes_in_cascade_order() {
    let tree = StyleTree::from_value(json!({
        "styles": {
            "color": { "background": "red", "text": "red" },
            "blocks": {
                "core/heading": {
                    "color": { "background": "blue", "text": "blue" },
                    "elements": { "h1": { "typography": { "fontSize": "42px" } } }
                }
            },
            "elements": { "link": { "color": { "background": "yellow", "text": "yellow" } } }
        }
    }));

    let nodes = extract_style_nodes(&tree, &heading_selectors());
    let selectors: Vec<&str> = nodes.iter().map(|n| n.selector.as_str()).collect();
    assert_eq!(selectors, vec![":root", "a", "h1,h2,h3,h4,h5,h6", "h1"]);

    assert_eq!(
        render_styles(&tree, &heading_selectors()),
        ":root{background-color: red;color: red;}\
         a{background-color: yellow;color: yellow;}\
         h1,h2,h3,h4,h5,h6{background-color: blue;color: blue;}\
         h1{font-size: 42px;}"
    );
}

#[test]
fn test_rendered_output_is_well_formed() {
    let tree = StyleTree::from_value(json!({
        "styles": {
            "spacing": { "padding": { "top": "1px", "bottom": "2px" } },
            "blocks": { "core/heading": { "elements": { "link": { "color": { "text": "var:preset|color|ink" } } } } }
        },
        "settings": {
            "color": {
                "palette": [ { "slug": "ink", "color": "#111" } ],
                "gradients": [ { "slug": "dusk", "gradient": "linear-gradient(135deg, red 0%, blue 100%)" } ]
            },
            "custom": { "spacing": { "small": "4px", "large": "16px" } }
        }
    }));

    let sheet = render_global_styles(&tree, &heading_selectors(), &RenderOptions::default());
    let summary = check_stylesheet(&sheet.to_css()).unwrap();
    // :root custom props, :root styles, heading link, three palette classes
    assert_eq!(summary.rules, 6);
    assert_eq!(summary.declarations, 4 + 2 + 1 + 3);
}

#[test]
fn test_partially_broken_tree_still_renders() {
    let tree = StyleTree::from_value(json!({
        "styles": {
            "color": "not a group",
            "typography": { "fontSize": "10px" },
            "blocks": { "core/heading": 5 }
        },
        "settings": {
            "color": { "palette": [ { "slug": "ok", "color": "green" }, "broken" ] }
        }
    }));

    assert_eq!(
        render_styles(&tree, &heading_selectors()),
        ":root{font-size: 10px;}\
         .has-ok-color{color: green !important;}\
         .has-ok-background-color{background-color: green !important;}\
         .has-ok-border-color{border-color: green !important;}"
    );
    assert_eq!(
        render_custom_properties(&tree, &heading_selectors()),
        ":root{--wp--preset--color--ok: green;}"
    );
}

#[test]
fn test_empty_block_selector_renders_nothing() {
    let tree = StyleTree::from_value(json!({
        "styles": { "blocks": { "core/x": { "color": { "text": "red" } } } }
    }));
    let selectors = BlockSelectorMap::new().add("core/x", BlockSelector::new(""));

    let css = render_styles(&tree, &selectors);
    assert_eq!(css, "");
    assert!(check_stylesheet(&css).is_ok());
}

fn block_name() -> impl Strategy<Value = String> {
    "core/[a-z]{1,8}"
}

fn color() -> impl Strategy<Value = String> {
    "#[0-9a-f]{6}"
}

fn palette() -> impl Strategy<Value = Vec<(String, String)>> {
    prop::collection::vec(("[a-z][a-z0-9-]{0,8}", color()), 0..5)
}

fn tree_and_selectors() -> impl Strategy<Value = (StyleTree, BlockSelectorMap, Vec<String>)> {
    (
        prop::collection::vec((block_name(), color(), any::<bool>()), 0..6),
        palette(),
        color(),
    )
        .prop_map(|(blocks, palette, root_color)| {
            let mut block_styles = serde_json::Map::new();
            let mut selectors = BlockSelectorMap::new();
            let mut mapped = Vec::new();
            for (index, (name, text, registered)) in blocks.into_iter().enumerate() {
                block_styles.insert(name.clone(), json!({ "color": { "text": text } }));
                if registered {
                    let selector = format!(".block-{}", index);
                    selectors.insert(&name, BlockSelector::new(selector));
                    mapped.push(name);
                }
            }
            let palette: Vec<Value> = palette
                .into_iter()
                .map(|(slug, color)| json!({ "slug": slug, "color": color }))
                .collect();
            let tree = StyleTree::from_value(json!({
                "styles": { "color": { "text": root_color }, "blocks": block_styles },
                "settings": { "color": { "palette": palette } }
            }));
            (tree, selectors, mapped)
        })
}

proptest! {
    #[test]
    fn prop_root_node_first((tree, selectors, _) in tree_and_selectors()) {
        let nodes = extract_style_nodes(&tree, &selectors);
        prop_assert_eq!(nodes[0].selector.as_str(), ":root");
        prop_assert_eq!(&nodes[0].styles, &tree.styles.properties);
    }

    #[test]
    fn prop_only_mapped_blocks_emit_nodes((tree, selectors, _) in tree_and_selectors()) {
        let nodes = extract_style_nodes(&tree, &selectors);
        let expected = tree
            .styles
            .blocks
            .keys()
            .filter(|block| selectors.get(block).is_some())
            .count();
        prop_assert_eq!(nodes.len(), 1 + expected);
        for (block, styles) in tree.styles.blocks.iter() {
            if let Some(selector) = selectors.selector(block) {
                let matching: Vec<_> = nodes.iter().filter(|n| n.selector == selector).collect();
                prop_assert_eq!(matching.len(), 1);
                prop_assert_eq!(&matching[0].styles, &styles.properties);
            }
        }
    }

    #[test]
    fn prop_render_is_idempotent((tree, selectors, _) in tree_and_selectors()) {
        prop_assert_eq!(render_styles(&tree, &selectors), render_styles(&tree, &selectors));
        prop_assert_eq!(
            render_custom_properties(&tree, &selectors),
            render_custom_properties(&tree, &selectors)
        );
    }

    #[test]
    fn prop_palette_classes_trail_rules((tree, selectors, _) in tree_and_selectors()) {
        let css = render_styles(&tree, &selectors);
        let palette = tree.settings.settings.palette();
        let mut expected_tail = String::new();
        for preset in palette {
            expected_tail.push_str(&format!(
                ".has-{slug}-color{{color: {c} !important;}}\
                 .has-{slug}-background-color{{background-color: {c} !important;}}\
                 .has-{slug}-border-color{{border-color: {c} !important;}}",
                slug = preset.slug,
                c = preset.color
            ));
        }
        prop_assert!(css.ends_with(&expected_tail));
        let rules = check_stylesheet(&css).unwrap().rules;
        prop_assert_eq!(rules, 1 + (tree.styles.blocks.len() - count_unmapped(&tree, &selectors)) + 3 * palette.len());
    }

    #[test]
    fn prop_output_is_well_formed((tree, selectors, _) in tree_and_selectors()) {
        let sheet = render_global_styles(&tree, &selectors, &RenderOptions::default());
        prop_assert!(check_stylesheet(&sheet.to_css()).is_ok());
    }
}

fn count_unmapped(tree: &StyleTree, selectors: &BlockSelectorMap) -> usize {
    tree.styles
        .blocks
        .keys()
        .filter(|block| selectors.get(block).is_none())
        .count()
}
