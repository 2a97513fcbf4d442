use chrono::{DateTime, Utc};
use pawhaven_http::validate::{FieldCheck, FieldError};
use serde::{Deserialize, Serialize};
use serde_json::Value;
use sqlx::FromRow;

/// Image shown for pets created without a photo.
pub const PLACEHOLDER_PHOTO: &str = "/static/img/placeholder.png";

/// Full pet record as returned by the detail endpoint.
#[derive(Debug, Clone, Serialize, Deserialize, FromRow, PartialEq)]
pub struct Pet {
    pub id: i64,
    pub name: String,
    pub species: String,
    pub breed: Option<String>,
    pub age: String,
    pub size: String,
    pub gender: String,
    pub city: Option<String>,
    pub state: Option<String>,
    pub good_with_kids: bool,
    pub vaccinated: bool,
    pub description: Option<String>,
    pub photo_url: Option<String>,
    pub created_at: DateTime<Utc>,
}

/// Listing projection: every column except the long-form description.
#[derive(Debug, Clone, Serialize, Deserialize, FromRow, PartialEq)]
pub struct PetSummary {
    pub id: i64,
    pub name: String,
    pub species: String,
    pub breed: Option<String>,
    pub age: String,
    pub size: String,
    pub gender: String,
    pub city: Option<String>,
    pub state: Option<String>,
    pub good_with_kids: bool,
    pub vaccinated: bool,
    pub photo_url: Option<String>,
    pub created_at: DateTime<Utc>,
}

/// One page of listing results.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PetPage {
    pub items: Vec<PetSummary>,
    pub page: u32,
    pub pages: u32,
    pub total: i64,
}

/// Admin request body for adding a pet.
///
/// Fields stay untyped on the wire so that missing or wrong-typed values
/// surface as a validation error listing the fields instead of a decode
/// failure.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct CreatePetRequest {
    #[serde(default)]
    pub name: Option<Value>,
    #[serde(default)]
    pub species: Option<Value>,
    #[serde(default)]
    pub breed: Option<Value>,
    #[serde(default)]
    pub age: Option<Value>,
    #[serde(default)]
    pub size: Option<Value>,
    #[serde(default)]
    pub gender: Option<Value>,
    #[serde(default)]
    pub city: Option<Value>,
    #[serde(default)]
    pub state: Option<Value>,
    #[serde(default)]
    pub good_with_kids: Option<Value>,
    #[serde(default)]
    pub vaccinated: Option<Value>,
    #[serde(default)]
    pub description: Option<Value>,
    #[serde(default)]
    pub photo_url: Option<Value>,
}

/// A validated pet ready to be inserted.
#[derive(Debug, Clone, PartialEq)]
pub struct NewPet {
    pub name: String,
    pub species: String,
    pub breed: String,
    pub age: AgeCategory,
    pub size: SizeCategory,
    pub gender: Gender,
    pub city: String,
    pub state: String,
    pub good_with_kids: bool,
    pub vaccinated: bool,
    pub description: String,
    pub photo_url: String,
}

impl CreatePetRequest {
    /// Trim every text field and check the required ones.
    ///
    /// On failure returns every rejected field in declaration order.
    pub fn validate(self) -> Result<NewPet, Vec<FieldError>> {
        let mut check = FieldCheck::new();
        let name = check.required_text("name", self.name);
        let species = check.required_text("species", self.species);
        let breed = check.optional_text("breed", self.breed);
        let age = check.required_text("age", self.age);
        let size = check.required_text("size", self.size);
        let gender = check.required_text("gender", self.gender);
        let city = check.optional_text("city", self.city);
        let state = check.optional_text("state", self.state);
        let good_with_kids = check.flag("good_with_kids", self.good_with_kids);
        let vaccinated = check.flag("vaccinated", self.vaccinated);
        let description = check.optional_text("description", self.description);
        let photo_url = check.optional_text("photo_url", self.photo_url);

        match (name, species, age, size, gender) {
            (Some(name), Some(species), Some(age), Some(size), Some(gender)) if check.is_clean() => {
                Ok(NewPet {
                    name,
                    species,
                    breed,
                    age: AgeCategory::from(age),
                    size: SizeCategory::from(size),
                    gender: Gender::from(gender),
                    city,
                    state,
                    good_with_kids,
                    vaccinated,
                    description,
                    photo_url: if photo_url.is_empty() {
                        PLACEHOLDER_PHOTO.to_string()
                    } else {
                        photo_url
                    },
                })
            }
            _ => Err(check.into_errors()),
        }
    }
}

/// Maturity bucket. Unknown text is kept verbatim and ranks after Senior.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(from = "String", into = "String")]
pub enum AgeCategory {
    Baby,
    Young,
    Adult,
    Senior,
    Other(String),
}

impl AgeCategory {
    /// Ranked categories, youngest first.
    pub const RANKED: [AgeCategory; 4] = [
        AgeCategory::Baby,
        AgeCategory::Young,
        AgeCategory::Adult,
        AgeCategory::Senior,
    ];

    /// Rank used by the `age` sort; anything unrecognized shares the last bucket.
    pub const UNRANKED: i64 = 5;

    pub fn rank(&self) -> i64 {
        match self {
            AgeCategory::Baby => 1,
            AgeCategory::Young => 2,
            AgeCategory::Adult => 3,
            AgeCategory::Senior => 4,
            AgeCategory::Other(_) => Self::UNRANKED,
        }
    }

    pub fn as_str(&self) -> &str {
        match self {
            AgeCategory::Baby => "Baby",
            AgeCategory::Young => "Young",
            AgeCategory::Adult => "Adult",
            AgeCategory::Senior => "Senior",
            AgeCategory::Other(raw) => raw,
        }
    }
}

impl From<String> for AgeCategory {
    fn from(value: String) -> Self {
        match value.as_str() {
            "Baby" => AgeCategory::Baby,
            "Young" => AgeCategory::Young,
            "Adult" => AgeCategory::Adult,
            "Senior" => AgeCategory::Senior,
            _ => AgeCategory::Other(value),
        }
    }
}

impl From<AgeCategory> for String {
    fn from(value: AgeCategory) -> Self {
        value.as_str().to_string()
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(from = "String", into = "String")]
pub enum SizeCategory {
    Small,
    Medium,
    Large,
    XLarge,
    Other(String),
}

impl SizeCategory {
    pub fn as_str(&self) -> &str {
        match self {
            SizeCategory::Small => "Small",
            SizeCategory::Medium => "Medium",
            SizeCategory::Large => "Large",
            SizeCategory::XLarge => "X-Large",
            SizeCategory::Other(raw) => raw,
        }
    }
}

impl From<String> for SizeCategory {
    fn from(value: String) -> Self {
        match value.as_str() {
            "Small" => SizeCategory::Small,
            "Medium" => SizeCategory::Medium,
            "Large" => SizeCategory::Large,
            "X-Large" => SizeCategory::XLarge,
            _ => SizeCategory::Other(value),
        }
    }
}

impl From<SizeCategory> for String {
    fn from(value: SizeCategory) -> Self {
        value.as_str().to_string()
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(from = "String", into = "String")]
pub enum Gender {
    Male,
    Female,
    Other(String),
}

impl Gender {
    pub fn as_str(&self) -> &str {
        match self {
            Gender::Male => "Male",
            Gender::Female => "Female",
            Gender::Other(raw) => raw,
        }
    }
}

impl From<String> for Gender {
    fn from(value: String) -> Self {
        match value.as_str() {
            "Male" => Gender::Male,
            "Female" => Gender::Female,
            _ => Gender::Other(value),
        }
    }
}

impl From<Gender> for String {
    fn from(value: Gender) -> Self {
        value.as_str().to_string()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn complete_request() -> CreatePetRequest {
        CreatePetRequest {
            name: Some(json!("  Pepper ")),
            species: Some(json!("Dog")),
            age: Some(json!("Young")),
            size: Some(json!("X-Large")),
            gender: Some(json!("Female")),
            ..CreatePetRequest::default()
        }
    }

    #[test]
    fn age_rank_puts_unknown_last() {
        let ranks: Vec<i64> = AgeCategory::RANKED.iter().map(AgeCategory::rank).collect();
        assert_eq!(ranks, vec![1, 2, 3, 4]);
        assert_eq!(AgeCategory::from("Kitten".to_string()).rank(), 5);
        assert_eq!(AgeCategory::from("baby".to_string()).rank(), 5);
    }

    #[test]
    fn free_text_categories_round_trip() {
        let size = SizeCategory::from("Tiny".to_string());
        assert_eq!(size.as_str(), "Tiny");
        assert_eq!(SizeCategory::from("X-Large".to_string()), SizeCategory::XLarge);
        assert_eq!(String::from(Gender::from("Unknown".to_string())), "Unknown");
    }

    #[test]
    fn validate_trims_and_defaults_photo() {
        let pet = complete_request().validate().unwrap();
        assert_eq!(pet.name, "Pepper");
        assert_eq!(pet.size, SizeCategory::XLarge);
        assert_eq!(pet.photo_url, PLACEHOLDER_PHOTO);
        assert_eq!(pet.breed, "");
        assert!(!pet.good_with_kids);
    }

    #[test]
    fn validate_treats_blank_photo_as_missing() {
        let request = CreatePetRequest {
            photo_url: Some(json!("   ")),
            ..complete_request()
        };
        assert_eq!(request.validate().unwrap().photo_url, PLACEHOLDER_PHOTO);
    }

    #[test]
    fn validate_lists_every_missing_field() {
        let request = CreatePetRequest {
            name: Some(json!(" ")),
            gender: None,
            ..complete_request()
        };
        assert_eq!(
            request.validate().unwrap_err(),
            vec![FieldError::required("name"), FieldError::required("gender")]
        );
    }

    #[test]
    fn validate_rejects_wrong_typed_fields() {
        let request = CreatePetRequest {
            name: Some(json!(5)),
            good_with_kids: Some(json!("yes")),
            vaccinated: Some(json!(1)),
            ..complete_request()
        };
        assert_eq!(
            request.validate().unwrap_err(),
            vec![
                FieldError::invalid("name"),
                FieldError::invalid("good_with_kids"),
                FieldError::invalid("vaccinated"),
            ]
        );
    }

    #[test]
    fn summary_json_has_no_description() {
        let summary = PetSummary {
            id: 1,
            name: "Buddy".into(),
            species: "Dog".into(),
            breed: None,
            age: "Young".into(),
            size: "Large".into(),
            gender: "Male".into(),
            city: None,
            state: None,
            good_with_kids: true,
            vaccinated: false,
            photo_url: None,
            created_at: Utc::now(),
        };
        let json = serde_json::to_value(summary).unwrap();
        assert!(json.get("description").is_none());
        assert_eq!(json["good_with_kids"], true);
    }
}
