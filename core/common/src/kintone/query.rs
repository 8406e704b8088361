//! シーク型ページネーションのクエリ組み立て

use crate::record::RecordId;

/// 1 ページの最大取得件数（records API の上限）
pub const PAGE_SIZE: usize = 500;

/// `$id` カーソルからページ取得クエリを組み立てる。
/// 初回（カーソルなし）は比較句を省略する。
pub fn seek_query(cursor: Option<&RecordId>, limit: usize) -> String {
    match cursor {
        Some(id) => format!("$id > {} order by $id asc limit {}", id.as_str(), limit),
        None => format!("order by $id asc limit {}", limit),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_seek_query_first_page() {
        assert_eq!(seek_query(None, 500), "order by $id asc limit 500");
    }

    #[test]
    fn test_seek_query_after_cursor() {
        let id = RecordId::new("500");
        assert_eq!(
            seek_query(Some(&id), 500),
            "$id > 500 order by $id asc limit 500"
        );
    }

    #[test]
    fn test_seek_query_custom_limit() {
        assert_eq!(seek_query(None, 1), "order by $id asc limit 1");
    }
}
