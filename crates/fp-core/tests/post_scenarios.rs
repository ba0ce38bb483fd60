use fp_core::{parse_feed, PostController, PostId, DEFAULT_COMMENT_AUTHOR};

fn single(json: &str) -> PostController {
    let mut posts = parse_feed(json).expect("feed should ingest");
    assert_eq!(posts.len(), 1);
    PostController::new(posts.remove(0))
}

#[test]
fn textual_id_post_liked_then_projected() {
    let mut controller = single(
        r#"[{ "id": "42", "username": "ada", "userImage": "/a.png", "content": "hi",
              "likes": 10, "comments": 2, "shares": 0,
              "isLiked": false, "isBookmarked": false, "categories": [] }]"#,
    );

    controller.toggle_like();
    let view = controller.project_view_model();

    assert_eq!(view.likes, 11);
    assert_eq!(view.id, PostId::new(42));
    assert_eq!(serde_json::to_value(&view).unwrap()["id"], serde_json::json!(42));
}

#[test]
fn numeric_id_passes_through() {
    let controller = single(
        r#"[{ "id": 7, "username": "bob", "userImage": "/b.png", "content": "",
              "likes": 0, "comments": 0, "shares": 0,
              "isLiked": true, "isBookmarked": false }]"#,
    );

    assert_eq!(controller.project_view_model().id.get(), 7);
    assert_eq!(controller.project_share_view().id.get(), 7);
}

#[test]
fn comments_overlay_base_count() {
    let mut controller = single(
        r#"[{ "id": "1", "username": "c", "userImage": "", "content": "x",
              "likes": 0, "comments": 5, "shares": 0,
              "isLiked": false, "isBookmarked": false }]"#,
    );

    controller.add_comment(DEFAULT_COMMENT_AUTHOR, "");
    controller.add_comment(DEFAULT_COMMENT_AUTHOR, "second");

    let controls = controller.controls();
    assert_eq!(controls.comment_total, 7);
    assert_eq!(controller.post().comments, 5);

    let view = controller.project_view_model();
    assert_eq!(view.comments.base_count, 5);
    assert_eq!(view.comments.entries[0].content, "");
    assert_eq!(view.comments.entries[1].id, 2);
}
