//! Company entity: an organisation that owns products.

/// A stored company.
///
/// `id` is assigned by storage and `identity_company` is generated once at
/// creation; neither changes afterwards.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Company {
    pub id: i64,
    pub identity_company: String,
    pub title: String,
    pub description: String,
    pub location: String,
    /// Free-form working hours, e.g. `8:30-17:30`.
    pub schedule: String,
}

impl Company {
    /// Creates a new Company instance.
    pub fn new(
        id: i64,
        identity_company: String,
        title: String,
        description: String,
        location: String,
        schedule: String,
    ) -> Self {
        Self {
            id,
            identity_company,
            title,
            description,
            location,
            schedule,
        }
    }
}

/// Input data for creating a new company.
///
/// The external identifier is generated by the repository on insert.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NewCompany {
    pub title: String,
    pub description: String,
    pub location: String,
    pub schedule: String,
}

/// Partial update for an existing company.
///
/// `None` fields are left unchanged.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct CompanyPatch {
    pub title: Option<String>,
    pub description: Option<String>,
    pub location: Option<String>,
    pub schedule: Option<String>,
}

impl CompanyPatch {
    /// Returns true if the patch would not change anything.
    pub fn is_empty(&self) -> bool {
        self.title.is_none()
            && self.description.is_none()
            && self.location.is_none()
            && self.schedule.is_none()
    }
}

impl From<NewCompany> for CompanyPatch {
    fn from(company: NewCompany) -> Self {
        Self {
            title: Some(company.title),
            description: Some(company.description),
            location: Some(company.location),
            schedule: Some(company.schedule),
        }
    }
}
