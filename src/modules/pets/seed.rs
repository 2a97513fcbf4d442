use super::models::{AgeCategory, Gender, NewPet, SizeCategory};
use super::repository::PetRepository;

#[allow(clippy::too_many_arguments)]
fn demo(
    name: &str,
    species: &str,
    breed: &str,
    age: AgeCategory,
    size: SizeCategory,
    gender: Gender,
    city: &str,
    state: &str,
    good_with_kids: bool,
    vaccinated: bool,
    description: &str,
    photo_url: &str,
) -> NewPet {
    NewPet {
        name: name.to_string(),
        species: species.to_string(),
        breed: breed.to_string(),
        age,
        size,
        gender,
        city: city.to_string(),
        state: state.to_string(),
        good_with_kids,
        vaccinated,
        description: description.to_string(),
        photo_url: photo_url.to_string(),
    }
}

/// The demo catalogue inserted into a fresh store.
pub fn demo_pets() -> Vec<NewPet> {
    vec![
        demo(
            "Buddy",
            "Dog",
            "Labrador Mix",
            AgeCategory::Young,
            SizeCategory::Large,
            Gender::Male,
            "Bengaluru",
            "Karnataka",
            true,
            true,
            "Playful and loves fetch!",
            "https://picsum.photos/seed/dog1/600/400",
        ),
        demo(
            "Luna",
            "Cat",
            "Siamese",
            AgeCategory::Adult,
            SizeCategory::Small,
            Gender::Female,
            "Pune",
            "Maharashtra",
            true,
            true,
            "Calm, cuddly, and curious.",
            "https://picsum.photos/seed/cat1/600/400",
        ),
        demo(
            "Coco",
            "Rabbit",
            "Holland Lop",
            AgeCategory::Baby,
            SizeCategory::Small,
            Gender::Female,
            "Delhi",
            "Delhi",
            true,
            false,
            "Tiny hopper, very gentle.",
            "https://picsum.photos/seed/rabbit1/600/400",
        ),
        demo(
            "Max",
            "Dog",
            "Beagle",
            AgeCategory::Adult,
            SizeCategory::Medium,
            Gender::Male,
            "Mumbai",
            "Maharashtra",
            false,
            true,
            "Sniffer pro. Needs active family.",
            "https://picsum.photos/seed/dog2/600/400",
        ),
        demo(
            "Misty",
            "Cat",
            "Persian",
            AgeCategory::Senior,
            SizeCategory::Small,
            Gender::Female,
            "Hyderabad",
            "Telangana",
            false,
            true,
            "Regal, relaxed, and low-maintenance.",
            "https://picsum.photos/seed/cat2/600/400",
        ),
    ]
}

/// Insert the demo catalogue when the store holds no pets.
///
/// Returns how many pets were inserted; zero on an existing store.
pub async fn seed_if_empty(repo: &PetRepository) -> Result<usize, sqlx::Error> {
    let existing = repo.count().await?;
    if existing > 0 {
        tracing::info!(existing, "pet store already populated; skipping seed");
        return Ok(0);
    }

    let ids = repo.insert_all(&demo_pets()).await?;
    tracing::info!(inserted = ids.len(), "seeded demo pets");
    Ok(ids.len())
}
