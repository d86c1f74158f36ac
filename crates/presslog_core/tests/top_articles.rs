mod common;

use common::{insert_article, insert_author, insert_log_rows, news_db};
use presslog_core::repo::stats_repo::SUCCESS_STATUS;
use presslog_core::{SqliteStatsRepository, StatsRepository};

const DAY: &str = "2017-01-01 00:00:00";

#[test]
fn orders_by_views_descending_and_caps_at_limit() {
    let conn = news_db();
    insert_author(&conn, 1, "Jane");
    insert_article(&conn, 1, "first", "First");
    insert_article(&conn, 1, "second", "Second");
    insert_article(&conn, 1, "third", "Third");
    insert_article(&conn, 1, "fourth", "Fourth");
    insert_log_rows(&conn, "/article/first", SUCCESS_STATUS, DAY, 5);
    insert_log_rows(&conn, "/article/second", SUCCESS_STATUS, DAY, 4);
    insert_log_rows(&conn, "/article/third", SUCCESS_STATUS, DAY, 3);
    insert_log_rows(&conn, "/article/fourth", SUCCESS_STATUS, DAY, 2);

    let repo = SqliteStatsRepository::new(&conn);
    let rows = repo.top_articles(3).unwrap();

    assert_eq!(rows.len(), 3);
    assert_eq!(rows[0].title, "First");
    assert_eq!(rows[0].views, 5);
    assert_eq!(rows[1].title, "Second");
    assert_eq!(rows[2].title, "Third");
    assert!(rows.windows(2).all(|pair| pair[0].views >= pair[1].views));
}

#[test]
fn returns_fewer_rows_than_limit_without_padding() {
    let conn = news_db();
    insert_author(&conn, 1, "Jane");
    insert_article(&conn, 1, "foo", "Foo Title");
    insert_article(&conn, 1, "bar", "Bar Title");
    insert_log_rows(&conn, "/article/foo", SUCCESS_STATUS, DAY, 5);
    insert_log_rows(&conn, "/article/bar", SUCCESS_STATUS, DAY, 2);

    let repo = SqliteStatsRepository::new(&conn);
    let rows = repo.top_articles(3).unwrap();

    assert_eq!(rows.len(), 2);
    assert_eq!(rows[0].title, "Foo Title");
    assert_eq!(rows[0].views, 5);
    assert_eq!(rows[1].title, "Bar Title");
    assert_eq!(rows[1].views, 2);
}

#[test]
fn ignores_root_path_and_paths_without_articles() {
    let conn = news_db();
    insert_author(&conn, 1, "Jane");
    insert_article(&conn, 1, "foo", "Foo Title");
    insert_log_rows(&conn, "/", SUCCESS_STATUS, DAY, 10);
    insert_log_rows(&conn, "/article/ghost", SUCCESS_STATUS, DAY, 10);
    insert_log_rows(&conn, "/article/foo", SUCCESS_STATUS, DAY, 1);

    let repo = SqliteStatsRepository::new(&conn);
    let rows = repo.top_articles(3).unwrap();

    assert_eq!(rows.len(), 1);
    assert_eq!(rows[0].title, "Foo Title");
    assert_eq!(rows[0].views, 1);
}

#[test]
fn slug_prefixes_do_not_cross_match() {
    let conn = news_db();
    insert_author(&conn, 1, "Jane");
    insert_article(&conn, 1, "foo", "Foo Title");
    insert_article(&conn, 1, "foobar", "Foobar Title");
    insert_log_rows(&conn, "/article/foobar", SUCCESS_STATUS, DAY, 4);

    let repo = SqliteStatsRepository::new(&conn);
    let rows = repo.top_articles(3).unwrap();

    assert_eq!(rows.len(), 1);
    assert_eq!(rows[0].title, "Foobar Title");
    assert_eq!(rows[0].views, 4);
}

#[test]
fn empty_log_yields_no_rows() {
    let conn = news_db();
    insert_author(&conn, 1, "Jane");
    insert_article(&conn, 1, "foo", "Foo Title");

    let repo = SqliteStatsRepository::new(&conn);
    let rows = repo.top_articles(3).unwrap();

    assert!(rows.is_empty());
}
