//! Filter, sort, and pagination for the public pet listing.
//!
//! Raw query-string values are parsed leniently into a [`PetQuery`], which
//! then renders the `COUNT` and `SELECT` statements. Both statements share
//! the same `WHERE` clause so `total` always describes the filtered set.

use pawhaven_kernel::settings::ListingSettings;
use serde::Deserialize;
use sqlx::{QueryBuilder, Sqlite};

use super::models::AgeCategory;
use crate::utils::{like_pattern, non_blank};

/// Page size used when the caller asks for a page size below one.
pub const FALLBACK_PER_PAGE: u32 = 20;

const SUMMARY_COLUMNS: &str = "id, name, species, breed, age, size, gender, city, state, \
     good_with_kids, vaccinated, photo_url, created_at";

const SEARCH_COLUMNS: [&str; 5] = ["name", "breed", "description", "city", "state"];

/// Query string accepted by `GET /api/pets`, kept as raw text.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct ListParams {
    pub q: Option<String>,
    pub species: Option<String>,
    pub age: Option<String>,
    pub size: Option<String>,
    pub gender: Option<String>,
    pub city: Option<String>,
    pub state: Option<String>,
    pub kids: Option<String>,
    pub vaccinated: Option<String>,
    pub sort: Option<String>,
    pub page: Option<String>,
    pub per_page: Option<String>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum SortKey {
    #[default]
    Newest,
    Name,
    Age,
}

impl SortKey {
    /// Unrecognized keys sort newest first.
    pub fn parse(value: Option<&str>) -> Self {
        match value {
            Some("name") => SortKey::Name,
            Some("age") => SortKey::Age,
            _ => SortKey::Newest,
        }
    }

    fn order_by(self) -> String {
        match self {
            SortKey::Newest => "created_at DESC, id DESC".to_string(),
            SortKey::Name => "name ASC, id DESC".to_string(),
            SortKey::Age => format!("{} ASC, created_at DESC, id DESC", age_rank_sql()),
        }
    }
}

/// `CASE` expression mapping the age column to its sort rank.
fn age_rank_sql() -> String {
    let arms: String = AgeCategory::RANKED
        .iter()
        .map(|category| format!(" WHEN '{}' THEN {}", category.as_str(), category.rank()))
        .collect();
    format!("(CASE age{} ELSE {} END)", arms, AgeCategory::UNRANKED)
}

/// Narrowing predicates; `None`/`false` means the predicate is not applied.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct PetFilter {
    pub search: Option<String>,
    pub species: Option<String>,
    pub age: Option<String>,
    pub size: Option<String>,
    pub gender: Option<String>,
    pub city: Option<String>,
    pub state: Option<String>,
    pub good_with_kids: bool,
    pub vaccinated: bool,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PageRequest {
    pub page: u32,
    pub per_page: u32,
}

impl PageRequest {
    pub fn offset(&self) -> i64 {
        i64::from(self.page - 1) * i64::from(self.per_page)
    }

    /// Number of pages needed for `total` rows; zero when nothing matched.
    pub fn pages_for(&self, total: i64) -> u32 {
        if total <= 0 {
            return 0;
        }
        let per_page = i64::from(self.per_page);
        u32::try_from((total + per_page - 1) / per_page).unwrap_or(u32::MAX)
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct PetQuery {
    pub filter: PetFilter,
    pub sort: SortKey,
    pub page: PageRequest,
}

impl PetQuery {
    pub fn from_params(params: ListParams, listing: &ListingSettings) -> Self {
        let filter = PetFilter {
            search: non_blank(params.q),
            species: present(params.species),
            age: present(params.age),
            size: present(params.size),
            gender: present(params.gender),
            city: present(params.city),
            state: present(params.state),
            good_with_kids: is_true(params.kids.as_deref()),
            vaccinated: is_true(params.vaccinated.as_deref()),
        };

        let page = parse_int(params.page.as_deref())
            .unwrap_or(1)
            .clamp(1, i64::from(u32::MAX)) as u32;

        let per_page = match parse_int(params.per_page.as_deref()) {
            None => listing.default_per_page,
            Some(n) if n < 1 => FALLBACK_PER_PAGE,
            Some(n) => n.min(i64::from(u32::MAX)) as u32,
        };
        let per_page = match listing.max_per_page {
            Some(cap) => per_page.clamp(1, cap.max(1)),
            None => per_page.max(1),
        };

        Self {
            filter,
            sort: SortKey::parse(params.sort.as_deref()),
            page: PageRequest { page, per_page },
        }
    }

    /// `SELECT COUNT(*)` over the filtered set.
    pub fn count_query(&self) -> QueryBuilder<'static, Sqlite> {
        let mut qb = QueryBuilder::new("SELECT COUNT(*) FROM pet");
        self.push_where(&mut qb);
        qb
    }

    /// Summary rows for the requested page, in the requested order.
    pub fn select_query(&self) -> QueryBuilder<'static, Sqlite> {
        let mut qb = QueryBuilder::new(format!("SELECT {SUMMARY_COLUMNS} FROM pet"));
        self.push_where(&mut qb);
        qb.push(" ORDER BY ");
        qb.push(self.sort.order_by());
        qb.push(" LIMIT ");
        qb.push_bind(i64::from(self.page.per_page));
        qb.push(" OFFSET ");
        qb.push_bind(self.page.offset());
        qb
    }

    fn push_where(&self, qb: &mut QueryBuilder<'static, Sqlite>) {
        let filter = &self.filter;
        qb.push(" WHERE 1 = 1");

        if let Some(search) = &filter.search {
            let pattern = like_pattern(search);
            qb.push(" AND (");
            for (i, column) in SEARCH_COLUMNS.iter().enumerate() {
                if i > 0 {
                    qb.push(" OR ");
                }
                qb.push(format!("{column} LIKE "));
                qb.push_bind(pattern.clone());
                qb.push(r" ESCAPE '\'");
            }
            qb.push(")");
        }

        for (column, value) in [
            ("species", &filter.species),
            ("age", &filter.age),
            ("size", &filter.size),
            ("gender", &filter.gender),
        ] {
            if let Some(value) = value {
                qb.push(format!(" AND {column} = "));
                qb.push_bind(value.clone());
            }
        }

        for (column, value) in [("city", &filter.city), ("state", &filter.state)] {
            if let Some(value) = value {
                qb.push(format!(" AND {column} LIKE "));
                qb.push_bind(like_pattern(value));
                qb.push(r" ESCAPE '\'");
            }
        }

        if filter.good_with_kids {
            qb.push(" AND good_with_kids = 1");
        }
        if filter.vaccinated {
            qb.push(" AND vaccinated = 1");
        }
    }
}

/// Empty strings are treated as "not supplied".
fn present(value: Option<String>) -> Option<String> {
    value.filter(|v| !v.is_empty())
}

/// Boolean filters only switch on for the literal string `true`.
fn is_true(value: Option<&str>) -> bool {
    value == Some("true")
}

fn parse_int(value: Option<&str>) -> Option<i64> {
    value.and_then(|v| v.trim().parse::<i64>().ok())
}
