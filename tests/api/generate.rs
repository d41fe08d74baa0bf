use crate::helpers::{pair, TestApp};
use claims::{assert_err, assert_ok};
use leetcode_archive::{
    error::Kind,
    generator::{Generator, Outcome, Summary},
    site::Category,
};
use serde_json::json;
use wiremock::{
    matchers::{method, path},
    Mock, ResponseTemplate,
};

#[tokio::test]
async fn accepted_problem_gets_latest_submission() {
    // Arrange
    let app = TestApp::spawn().await;
    app.mount_listing(vec![pair(1, "two-sum", 1, Some("ac"), false)])
        .await;
    app.mount_submission_page("two-sum", 0, &["101"], false)
        .await;
    app.mount_detail("101", "return a+b;").await;
    let session = app.session();
    let layout = app.layout();
    assert_ok!(layout.prepare());

    // Act
    let problems = assert_ok!(session.list_problems(Category::Algorithms).await);
    let generator = Generator::new(&session, &layout, app.renderer());
    let outcome = assert_ok!(generator.generate(&problems[0]).await);

    // Assert
    assert_eq!(
        outcome,
        Outcome::Written(app.output.join("easy/solved/1.two_sum.js"))
    );
    assert_eq!(
        app.read("easy/solved/1.two_sum.js"),
        "/*
 * @lc app=leetcode id=1 lang=javascript
 *
 * [1] two-sum
 */

// @lc code=start
return a+b;
// @lc code=end
"
    );
}

#[tokio::test]
async fn unsolved_problem_without_language_snippet_is_empty() {
    // Arrange
    let app = TestApp::spawn().await;
    app.mount_listing(vec![pair(2, "add-two", 2, Some(""), false)])
        .await;
    app.mount_snippets(
        "add-two",
        json!([{ "langSlug": "cpp", "code": "class Solution {\n};" }]),
    )
    .await;
    let session = app.session();
    let layout = app.layout();
    assert_ok!(layout.prepare());

    // Act
    let problems = assert_ok!(session.list_problems(Category::Algorithms).await);
    let generator = Generator::new(&session, &layout, app.renderer());
    assert_ok!(generator.generate(&problems[0]).await);

    // Assert
    let content = app.read("medium/2.add_two.js");
    assert!(content.contains("id=2 lang=javascript"));
    assert!(content.ends_with("// @lc code=start\n\n// @lc code=end\n"));
}

#[tokio::test]
async fn unsolved_problem_gets_starter_code() {
    // Arrange
    let app = TestApp::spawn().await;
    app.mount_listing(vec![pair(3, "longest-substring", 2, Some("notac"), false)])
        .await;
    app.mount_snippets(
        "longest-substring",
        json!([
            { "langSlug": "cpp", "code": "class Solution {};" },
            { "langSlug": "javascript", "code": "var lengthOfLongestSubstring = function(s) {\n};" }
        ]),
    )
    .await;
    let session = app.session();
    let layout = app.layout();
    assert_ok!(layout.prepare());

    // Act
    let problems = assert_ok!(session.list_problems(Category::Algorithms).await);
    assert_ok!(
        Generator::new(&session, &layout, app.renderer())
            .generate(&problems[0])
            .await
    );

    // Assert
    assert!(app
        .read("medium/3.longest_substring.js")
        .contains("// @lc code=start\nvar lengthOfLongestSubstring = function(s) {\n};\n// @lc code=end"));
}

#[tokio::test]
async fn paid_problems_are_skipped_without_requests() {
    // Arrange
    let app = TestApp::spawn().await;
    app.mount_listing(vec![
        pair(156, "binary-tree-upside-down", 2, Some("ac"), true),
        pair(157, "read-n-characters", 1, None, true),
    ])
    .await;
    Mock::given(method("POST"))
        .and(path("/graphql"))
        .respond_with(ResponseTemplate::new(500))
        .expect(0)
        .mount(&app.server)
        .await;
    let session = app.session();
    let layout = app.layout();
    assert_ok!(layout.prepare());

    // Act
    let problems = assert_ok!(session.list_problems(Category::Algorithms).await);
    let mut seen = Vec::new();
    let summary = assert_ok!(
        Generator::new(&session, &layout, app.renderer())
            .run(&problems, |_, problem, outcome| {
                seen.push((problem.slug.clone(), outcome == &Outcome::Skipped))
            })
            .await
    );

    // Assert
    assert_eq!(
        summary,
        Summary {
            written: 0,
            skipped: 2
        }
    );
    assert!(seen.iter().all(|(_, skipped)| *skipped));
    assert!(!app.output.join("medium/solved/156.binary_tree-upside-down.js").exists());
    assert!(!app.output.join("easy/157.read_n-characters.js").exists());
}

#[tokio::test]
async fn run_stops_at_first_failure() {
    // Arrange
    let app = TestApp::spawn().await;
    app.mount_listing(vec![
        pair(1, "two-sum", 1, None, false),
        pair(2, "add-two", 2, Some("ac"), false),
        pair(3, "three-sum", 2, None, false),
    ])
    .await;
    app.mount_snippets(
        "two-sum",
        json!([{ "langSlug": "javascript", "code": "var twoSum;" }]),
    )
    .await;
    app.mount_submission_page("add-two", 0, &[], false).await;
    Mock::given(method("POST"))
        .and(path("/graphql"))
        .and(wiremock::matchers::body_partial_json(
            json!({ "variables": { "titleSlug": "three-sum" } }),
        ))
        .respond_with(ResponseTemplate::new(200))
        .expect(0)
        .mount(&app.server)
        .await;
    let session = app.session();
    let layout = app.layout();
    assert_ok!(layout.prepare());

    // Act
    let problems = assert_ok!(session.list_problems(Category::Algorithms).await);
    let mut written = 0;
    let err = assert_err!(
        Generator::new(&session, &layout, app.renderer())
            .run(&problems, |_, _, _| written += 1)
            .await
    );

    // Assert
    assert!(matches!(err.kind(), Kind::NoSubmission(s) if s == "add-two"));
    assert_eq!(written, 1);
    assert!(app.read("easy/1.two_sum.js").contains("var twoSum;"));
    assert!(!app.output.join("medium/3.three_sum.js").exists());
}

#[tokio::test]
async fn archive_lists_and_writes_the_category() {
    // Arrange
    let app = TestApp::spawn().await;
    app.mount_listing(vec![
        pair(1, "two-sum", 1, None, false),
        pair(156, "binary-tree-upside-down", 2, None, true),
    ])
    .await;
    app.mount_snippets(
        "two-sum",
        json!([{ "langSlug": "javascript", "code": "var twoSum;" }]),
    )
    .await;
    let session = app.session();
    let layout = app.layout();

    // Act
    let summary = assert_ok!(
        Generator::new(&session, &layout, app.renderer())
            .archive(Category::Algorithms, |_, _, _| ())
            .await
    );

    // Assert
    assert_eq!(
        summary,
        Some(Summary {
            written: 1,
            skipped: 1
        })
    );
    assert!(app.read("easy/1.two_sum.js").contains("var twoSum;"));
}

#[tokio::test]
async fn second_run_requests_and_writes_nothing() {
    // Arrange
    let app = TestApp::spawn().await;
    Mock::given(method("GET"))
        .and(path("/api/problems/algorithms/"))
        .respond_with(ResponseTemplate::new(200).set_body_json(
            json!({ "stat_status_pairs": [pair(1, "two-sum", 1, None, false)] }),
        ))
        .expect(1)
        .mount(&app.server)
        .await;
    Mock::given(method("POST"))
        .and(path("/graphql"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "data": { "question": { "codeSnippets": [
                { "langSlug": "javascript", "code": "var twoSum;" }
            ] } }
        })))
        .expect(1)
        .mount(&app.server)
        .await;
    let session = app.session();
    let layout = app.layout();
    let generator = Generator::new(&session, &layout, app.renderer());
    assert_ok!(generator.archive(Category::Algorithms, |_, _, _| ()).await);
    std::fs::write(app.output.join("easy/1.two_sum.js"), "edited").unwrap();

    // Act
    let mut calls = 0;
    let summary = assert_ok!(
        generator
            .archive(Category::Algorithms, |_, _, _| calls += 1)
            .await
    );

    // Assert
    assert_eq!(summary, None);
    assert_eq!(calls, 0);
    assert_eq!(app.read("easy/1.two_sum.js"), "edited");
}
