use super::*;
use crate::net::types::AdImage;

fn ad(id: i64, title: &str) -> Advertisement {
    Advertisement {
        id,
        user_id: 1,
        title: title.to_owned(),
        description: "desc".to_owned(),
        images: vec![
            AdImage {
                id: 10,
                image_url: "https://img.example/10.jpg".to_owned(),
            },
            AdImage {
                id: 11,
                image_url: "https://img.example/11.jpg".to_owned(),
            },
        ],
        created_at: None,
    }
}

#[test]
fn replace_ad_swaps_matching_entry() {
    let mut list = vec![ad(1, "A"), ad(2, "B")];
    let mut updated = ad(2, "B2");
    updated.description = "new".to_owned();
    replace_ad(&mut list, updated);
    assert_eq!(list[1].title, "B2");
    assert_eq!(list[1].description, "new");
    assert_eq!(list[0].title, "A");
}

#[test]
fn replace_ad_ignores_unknown_id() {
    let mut list = vec![ad(1, "A")];
    replace_ad(&mut list, ad(9, "ghost"));
    assert_eq!(list.len(), 1);
    assert_eq!(list[0].title, "A");
}

#[test]
fn remove_ad_drops_matching_entry() {
    let mut list = vec![ad(1, "A"), ad(2, "B")];
    remove_ad(&mut list, 1);
    assert_eq!(list.len(), 1);
    assert_eq!(list[0].id, 2);
}

#[test]
fn remove_ad_is_a_no_op_for_unknown_id() {
    let mut list = vec![ad(1, "A")];
    remove_ad(&mut list, 9);
    assert_eq!(list.len(), 1);
}

#[test]
fn remove_ad_image_drops_only_that_image() {
    let mut list = vec![ad(1, "A"), ad(2, "B")];
    remove_ad_image(&mut list, 1, 10);
    assert_eq!(list[0].images.len(), 1);
    assert_eq!(list[0].images[0].id, 11);
    assert_eq!(list[1].images.len(), 2);
}
