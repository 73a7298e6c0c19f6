use bubbletea_rs::Msg;
use storefront_widgets::config::Config;
use storefront_widgets::listing::{
    category_from_query, load_items_json, CatalogItem, CategorySelectedMsg, Model,
    NextPageMsg, PageSize, PageSizeChangedMsg, SearchTextChangedMsg,
};
use storefront_widgets::paginator::PageMarker;
use storefront_widgets::toast::{self, Kind, Phase, ShowMsg};

const CATALOG: &str = r#"[
    {"title": "Organic Compost", "description": "Rich soil for raised beds", "category": "garden", "price": "$12.99"},
    {"title": "Bamboo Trowel", "description": "Light hand tool", "category": "tools", "price": "$9.50"},
    {"title": "Seed Starter Kit", "description": "Everything to sprout indoors", "category": "garden"},
    {"title": "Rain Barrel", "description": "Collect water for dry weeks", "category": "water"},
    {"title": "Pruning Shears", "description": "Sharp bypass blades", "category": "tools"},
    {"title": "Drip Irrigation Set", "description": "Saves WATER and time", "category": "water"},
    {"title": "Worm Bin", "description": "Compost with worms", "category": "garden"},
    {"title": "Garden Fork", "description": "Loosen heavy soil", "category": "tools"},
    {"title": "Mulch Guide", "description": "Keep moisture in", "category": "garden"},
    {"title": "Solar Lights", "description": "Path lighting", "category": "outdoor"},
    {"title": "Bird Feeder", "description": "Cedar wood", "category": "outdoor"},
    {"title": "Herb Planter", "description": "Kitchen herbs", "category": "garden"},
    {"title": "Soil Tester", "description": "Check pH quickly", "category": "garden"}
]"#;

fn catalog() -> Vec<CatalogItem> {
    load_items_json(CATALOG).expect("catalog parses")
}

fn numbered(n: usize) -> Vec<CatalogItem> {
    (1..=n)
        .map(|i| CatalogItem::new(&format!("Post {i}"), "", "blog"))
        .collect()
}

fn titles(items: &[&CatalogItem]) -> Vec<String> {
    items.iter().map(|i| i.title.clone()).collect()
}

#[test]
fn category_selection_from_thirteen_items() {
    let mut listing = Model::new(catalog());
    assert_eq!(listing.len(), 13);
    assert_eq!(listing.current_page_descriptor().total_pages, 3);

    let tools = listing.set_category("tools");
    assert_eq!(
        titles(&tools),
        vec!["Bamboo Trowel", "Pruning Shears", "Garden Fork"]
    );

    let d = listing.current_page_descriptor();
    assert_eq!((d.page, d.total_pages, d.total_count), (1, 1, 3));
    assert_eq!(d.summary("product", "products"), "Showing 1-3 of 3 products");
}

#[test]
fn last_page_of_twenty() {
    let mut listing = Model::new(numbered(20));
    let page = listing.go_to_page(4);
    assert_eq!(page.descriptor.bounds, Some((19, 20)));
    assert_eq!(titles(&page.items), vec!["Post 19", "Post 20"]);
    assert!(!page.descriptor.has_next());
}

#[test]
fn nothing_matches() {
    let mut listing = Model::new(catalog());
    listing.set_category("tools");
    listing.set_search_term("water");

    let d = listing.current_page_descriptor();
    assert_eq!(d.total_count, 0);
    assert_eq!(d.total_pages, 1);
    assert!(!d.shows_navigation());
    assert_eq!(d.summary("product", "products"), "No products found");
}

#[test]
fn search_covers_every_field_case_insensitively() {
    let mut listing = Model::new(catalog());
    // "water" only appears in categories and descriptions
    let hits = titles(&listing.set_search_term("WaTeR"));
    assert_eq!(hits, vec!["Rain Barrel", "Drip Irrigation Set"]);

    // search results are a subset of the category filter
    listing.set_category("garden");
    let garden_compost = titles(&listing.set_search_term("compost"));
    assert_eq!(garden_compost, vec!["Organic Compost", "Worm Bin"]);
}

#[test]
fn pages_partition_the_visible_items() {
    let mut listing = Model::new(numbered(31));
    listing.set_page_size(PageSize::fixed(9).expect("nonzero"));
    let pages = listing.current_page_descriptor().total_pages;
    assert_eq!(pages, 4);

    let mut seen = Vec::new();
    for p in 1..=pages {
        seen.extend(titles(&listing.go_to_page(p as i64).items));
    }
    assert_eq!(seen, titles(&listing.visible_items()));
}

#[test]
fn page_requests_are_clamped() {
    let mut listing = Model::new(numbered(20));
    assert_eq!(listing.go_to_page(-1).page(), 1);
    assert_eq!(listing.go_to_page(0).page(), 1);
    assert_eq!(listing.go_to_page(99).page(), 4);
}

#[test]
fn messages_drive_the_listing() {
    let mut listing = Model::new(catalog());
    listing.update(&(Box::new(NextPageMsg) as Msg));
    assert_eq!(listing.current_page_descriptor().page, 2);

    listing.update(&(Box::new(CategorySelectedMsg("garden".to_string())) as Msg));
    assert_eq!(listing.current_page_descriptor().page, 1);
    assert_eq!(listing.len(), 6);

    listing.update(&(Box::new(SearchTextChangedMsg("soil".to_string())) as Msg));
    assert_eq!(
        titles(&listing.visible_items()),
        vec!["Organic Compost", "Soil Tester"]
    );

    listing.update(&(Box::new(CategorySelectedMsg("all".to_string())) as Msg));
    assert_eq!(
        titles(&listing.visible_items()),
        vec!["Organic Compost", "Garden Fork", "Soil Tester"]
    );
}

#[test]
fn bootstrap_category_from_query_string() {
    let listing = Model::new(catalog())
        .with_initial_category(category_from_query("?ref=mail&category=outdoor").as_deref());
    assert_eq!(listing.len(), 2);

    let listing =
        Model::new(catalog()).with_initial_category(category_from_query("?category=").as_deref());
    assert_eq!(listing.len(), 13);
}

#[test]
fn page_number_bar_for_many_pages() {
    let mut listing = Model::new(numbered(120)).with_max_page_buttons(5);
    listing.go_to_page(10);
    assert_eq!(
        listing.page_numbers(),
        vec![
            PageMarker::Page(1),
            PageMarker::Ellipsis,
            PageMarker::Page(8),
            PageMarker::Page(9),
            PageMarker::Page(10),
            PageMarker::Page(11),
            PageMarker::Page(12),
            PageMarker::Ellipsis,
            PageMarker::Page(20),
        ]
    );
}

#[test]
fn config_drives_defaults() {
    let config = Config::from_toml_str(
        r#"
        default_page_size = "12"
        noun_singular = "product"
        noun_plural = "products"
        "#,
    )
    .expect("valid config");

    let listing = Model::from_config(catalog(), &config);
    let d = listing.current_page_descriptor();
    assert_eq!(d.total_pages, 2);
    assert_eq!(
        d.summary(&config.noun_singular, &config.noun_plural),
        "Showing 1-12 of 13 products"
    );
}

#[tokio::test]
async fn page_size_change_reaches_the_toast() {
    let mut listing = Model::new(numbered(20));
    let mut toasts = toast::Model::new();

    let cmd = listing
        .update(&(Box::new(PageSizeChangedMsg(PageSize::All)) as Msg))
        .expect("page size change notifies");
    assert_eq!(listing.current_page_descriptor().total_pages, 1);

    let msg = cmd.await.expect("ShowMsg");
    let show = msg.downcast_ref::<ShowMsg>().expect("ShowMsg");
    assert_eq!(show.kind, Kind::Info);
    assert_eq!(show.message, "Showing all articles");

    let reveal = toasts.update(&msg).expect("enter timer");
    let current = toasts.current().expect("toast created");
    assert_eq!(current.phase(), Phase::Entering);
    assert_eq!(current.message, "Showing all articles");

    // Entering renders nothing until the reveal tick arrives
    assert!(toasts.view().is_empty());
    let tick = reveal.await.expect("reveal tick");
    toasts.update(&tick);
    assert_eq!(toasts.current().map(|t| t.phase()), Some(Phase::Visible));
    assert!(!toasts.view().is_empty());
}
