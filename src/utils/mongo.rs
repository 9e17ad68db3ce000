use mongodb::{
    bson::Document,
    Collection,
    Cursor,
};
use super::pagination::Pagination;

pub async fn find_page<T>(
    collection: &Collection<T>,
    filter: Document,
    sort_field: &str,
    ascending: bool,
    page: &Pagination,
) -> mongodb::error::Result<Cursor<T>>
where
    T: Unpin + Send + Sync,
{
    let sort_order: i32 = match ascending {
        true => 1,
        false => -1,
    };

    let mut sort = Document::new();
    sort.insert(sort_field, sort_order);

    collection
        .find(filter)
        .sort(sort)
        .limit(page.per_page as i64)
        .skip(page.skip())
        .await
}
