use serde::Serialize;

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Pagination {
    pub page: u32,
    pub per_page: u32,
    pub total: u64,
    pub total_pages: u32,
}

impl Pagination {
    //requests outside [1, total_pages] are clamped, never rejected
    pub fn new(requested: u32, per_page: u32, total: u64) -> Pagination {
        let per_page = per_page.max(1);
        let total_pages = match total {
            0 => 1,
            _ => ((total + per_page as u64 - 1) / per_page as u64) as u32,
        };

        Pagination {
            page: requested.clamp(1, total_pages),
            per_page,
            total,
            total_pages,
        }
    }

    pub fn skip(&self) -> u64 {
        (self.page as u64 - 1) * self.per_page as u64
    }

    pub fn next(&self) -> u32 {
        match self.page >= self.total_pages {
            true => self.page,
            false => self.page + 1,
        }
    }

    pub fn prev(&self) -> u32 {
        match self.page <= 1 {
            true => 1,
            false => self.page - 1,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn seven_reports_page_size_five() {
        let first = Pagination::new(1, 5, 7);
        assert_eq!(first.page, 1);
        assert_eq!(first.skip(), 0);
        assert_eq!(first.total_pages, 2);

        //page 1 holds reports 1-5, page 2 holds 6-7
        let second = Pagination::new(first.next(), 5, 7);
        assert_eq!(second.page, 2);
        assert_eq!(second.skip(), 5);

        //next at the last page is a no-op
        assert_eq!(second.next(), 2);
    }

    #[test]
    fn prev_at_first_page_is_a_no_op() {
        let page = Pagination::new(1, 5, 12);
        assert_eq!(page.prev(), 1);
    }

    #[test]
    fn requests_past_the_last_page_are_clamped() {
        let page = Pagination::new(9, 5, 7);
        assert_eq!(page.page, 2);

        let page = Pagination::new(0, 5, 7);
        assert_eq!(page.page, 1);
    }

    #[test]
    fn empty_total_still_has_one_page() {
        let page = Pagination::new(3, 5, 0);
        assert_eq!(page.page, 1);
        assert_eq!(page.total_pages, 1);
        assert_eq!(page.skip(), 0);
    }

    #[test]
    fn exact_multiple_has_no_trailing_page() {
        let page = Pagination::new(2, 5, 10);
        assert_eq!(page.total_pages, 2);
        assert_eq!(page.next(), 2);
    }
}
