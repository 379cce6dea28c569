use chrono::NaiveDate;
use login_audit::audit::{self, DEFAULT_PAGE_SIZE, LoginLogFilter, MAX_PAGE_SIZE};
use login_audit::models::admin_login_log::LoginStatus;
use login_audit::principal::Principal;
use login_audit::testing::TestDb;

fn date(value: &str) -> NaiveDate {
    NaiveDate::parse_from_str(value, "%Y-%m-%d").unwrap()
}

async fn seed_site_five(db: &TestDb) {
    db.seed_site(5, "Echo", 1).await;
    db.seed_user(10, "admin", "The Admin").await;

    db.seed_log(1, Some(10), "admin", "10.1.1.1", LoginStatus::Failed, Some(5), "2024-01-05 08:00:00")
        .await;
    db.seed_log(2, Some(10), "admin", "10.1.1.2", LoginStatus::Success, Some(5), "2024-01-06 08:00:00")
        .await;
    db.seed_log(3, None, "Administrator", "192.168.0.1", LoginStatus::Failed, Some(5), "2024-01-07 08:00:00")
        .await;
    db.seed_log(4, None, "guest", "192.168.0.2", LoginStatus::Failed, Some(5), "2024-01-08 08:00:00")
        .await;
}

#[tokio::test]
async fn username_filter_is_case_insensitive_substring() {
    let db = TestDb::new().await;
    seed_site_five(&db).await;

    let filter = LoginLogFilter {
        username: Some("ADMIN".to_string()),
        ..Default::default()
    };
    let page = audit::list(&db.conn, &filter, &Principal::for_site(5))
        .await
        .unwrap();

    // "admin" x2 and "Administrator" all contain the term
    assert_eq!(page.total, 3);
    assert!(page.entries.iter().all(|e| e
        .record
        .username
        .to_lowercase()
        .contains("admin")));
}

#[tokio::test]
async fn username_filter_is_trimmed_and_empty_is_skipped() {
    let db = TestDb::new().await;
    seed_site_five(&db).await;

    let principal = Principal::for_site(5);

    let padded = LoginLogFilter {
        username: Some("  guest  ".to_string()),
        ..Default::default()
    };
    let page = audit::list(&db.conn, &padded, &principal).await.unwrap();
    assert_eq!(page.total, 1);
    assert_eq!(page.entries[0].record.id, 4);

    let blank = LoginLogFilter {
        username: Some("   ".to_string()),
        ..Default::default()
    };
    let page = audit::list(&db.conn, &blank, &principal).await.unwrap();
    assert_eq!(page.total, 4);
}

#[tokio::test]
async fn ip_filter_is_substring() {
    let db = TestDb::new().await;
    seed_site_five(&db).await;

    let filter = LoginLogFilter {
        ip: Some("192.168".to_string()),
        ..Default::default()
    };
    let page = audit::list(&db.conn, &filter, &Principal::for_site(5))
        .await
        .unwrap();

    assert_eq!(page.total, 2);
}

#[tokio::test]
async fn status_zero_is_a_real_filter() {
    let db = TestDb::new().await;
    seed_site_five(&db).await;

    let filter = LoginLogFilter {
        username: Some("admin".to_string()),
        status: Some(LoginStatus::Failed),
        ..Default::default()
    };
    let page = audit::list(&db.conn, &filter, &Principal::for_site(5))
        .await
        .unwrap();

    assert_eq!(page.total, 2);
    assert!(page
        .entries
        .iter()
        .all(|e| e.record.status == LoginStatus::Failed));
    assert_eq!(page.page_size, DEFAULT_PAGE_SIZE);
}

#[tokio::test]
async fn end_date_is_inclusive_of_the_whole_day() {
    let db = TestDb::new().await;
    db.seed_site(1, "Alpha", 1).await;

    db.seed_log(1, None, "a", "1.1.1.1", LoginStatus::Success, Some(1), "2024-01-10 23:59:59")
        .await;
    db.seed_log(2, None, "b", "1.1.1.2", LoginStatus::Success, Some(1), "2024-01-11 00:00:00")
        .await;

    let filter = LoginLogFilter {
        end_date: Some(date("2024-01-10")),
        ..Default::default()
    };
    let page = audit::list(&db.conn, &filter, &Principal::super_admin())
        .await
        .unwrap();

    assert_eq!(page.total, 1);
    assert_eq!(page.entries[0].record.id, 1);
}

#[tokio::test]
async fn start_date_is_inclusive_from_midnight() {
    let db = TestDb::new().await;
    db.seed_site(1, "Alpha", 1).await;

    db.seed_log(1, None, "a", "1.1.1.1", LoginStatus::Success, Some(1), "2024-01-09 23:59:59")
        .await;
    db.seed_log(2, None, "b", "1.1.1.2", LoginStatus::Success, Some(1), "2024-01-10 00:00:00")
        .await;

    let filter = LoginLogFilter {
        start_date: Some(date("2024-01-10")),
        ..Default::default()
    };
    let page = audit::list(&db.conn, &filter, &Principal::super_admin())
        .await
        .unwrap();

    assert_eq!(page.total, 1);
    assert_eq!(page.entries[0].record.id, 2);
}

#[tokio::test]
async fn date_range_bounds_combine() {
    let db = TestDb::new().await;
    seed_site_five(&db).await;

    let filter = LoginLogFilter {
        start_date: Some(date("2024-01-06")),
        end_date: Some(date("2024-01-07")),
        ..Default::default()
    };
    let page = audit::list(&db.conn, &filter, &Principal::for_site(5))
        .await
        .unwrap();

    assert_eq!(page.total, 2);
    let ids: Vec<i32> = page.entries.iter().map(|e| e.record.id).collect();
    assert_eq!(ids, vec![3, 2]);
}

#[tokio::test]
async fn entries_are_sorted_newest_first() {
    let db = TestDb::new().await;
    seed_site_five(&db).await;

    let page = audit::list(&db.conn, &LoginLogFilter::default(), &Principal::for_site(5))
        .await
        .unwrap();

    let ids: Vec<i32> = page.entries.iter().map(|e| e.record.id).collect();
    assert_eq!(ids, vec![4, 3, 2, 1]);
}

#[tokio::test]
async fn pagination_defaults_and_clamp() {
    let db = TestDb::new().await;
    db.seed_site(1, "Alpha", 1).await;
    for i in 1..=20 {
        db.seed_log(
            i,
            None,
            "user",
            "1.1.1.1",
            LoginStatus::Success,
            Some(1),
            &format!("2024-01-01 00:00:{:02}", i % 60),
        )
        .await;
    }

    let principal = Principal::super_admin();

    let page = audit::list(&db.conn, &LoginLogFilter::default(), &principal)
        .await
        .unwrap();
    assert_eq!(page.page, 1);
    assert_eq!(page.page_size, DEFAULT_PAGE_SIZE);
    assert_eq!(page.entries.len(), DEFAULT_PAGE_SIZE as usize);
    assert_eq!(page.total, 20);

    let second = LoginLogFilter {
        page: Some(2),
        ..Default::default()
    };
    let page = audit::list(&db.conn, &second, &principal).await.unwrap();
    assert_eq!(page.page, 2);
    assert_eq!(page.entries.len(), 5);

    let oversized = LoginLogFilter {
        page_size: Some(10_000),
        ..Default::default()
    };
    let page = audit::list(&db.conn, &oversized, &principal).await.unwrap();
    assert_eq!(page.page_size, MAX_PAGE_SIZE);
}

#[tokio::test]
async fn entries_carry_joined_user_and_site_summaries() {
    let db = TestDb::new().await;
    seed_site_five(&db).await;

    let page = audit::list(&db.conn, &LoginLogFilter::default(), &Principal::for_site(5))
        .await
        .unwrap();

    let with_user = page.entries.iter().find(|e| e.record.id == 1).unwrap();
    let user = with_user.user.as_ref().unwrap();
    assert_eq!(user.username, "admin");
    assert_eq!(user.nickname, "The Admin");

    let site = with_user.site.as_ref().unwrap();
    assert_eq!(site.name, "Echo");

    // Unresolved user stays None
    let without_user = page.entries.iter().find(|e| e.record.id == 4).unwrap();
    assert!(without_user.user.is_none());
}
