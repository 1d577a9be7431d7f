use serde::{Deserialize, Serialize};

use crate::store::{Collection, ResumeStore};
use crate::validation::{FieldSet, Schema};

/// A resume record type served by the generic CRUD handlers.
///
/// Each implementor names its route segment, its field schema and the
/// collection that holds it; the handlers do the rest.
pub trait Record: Clone + Serialize + std::fmt::Debug + Send + Sync + 'static {
    /// Path segment under `/resume`.
    const KIND: &'static str;
    /// Human-readable name used in messages.
    const LABEL: &'static str;
    const SCHEMA: Schema;

    fn id(&self) -> u64;

    /// Builds a record from fields that passed create validation.
    fn from_fields(id: u64, fields: FieldSet) -> Self;

    /// Overwrites the supplied fields, keeping the rest.
    fn apply(&mut self, fields: FieldSet);

    fn collection(store: &ResumeStore) -> &Collection<Self>;
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Experience {
    pub id: u64,
    pub title: String,
    pub company: String,
    pub start_date: String,
    pub end_date: String,
    pub description: String,
    pub logo: String,
}

impl Record for Experience {
    const KIND: &'static str = "experience";
    const LABEL: &'static str = "Experience";
    const SCHEMA: Schema = Schema {
        fields: &[
            "title",
            "company",
            "start_date",
            "end_date",
            "description",
            "logo",
        ],
        formats: &[],
    };

    fn id(&self) -> u64 {
        self.id
    }

    fn from_fields(id: u64, mut fields: FieldSet) -> Self {
        Experience {
            id,
            title: fields.take("title"),
            company: fields.take("company"),
            start_date: fields.take("start_date"),
            end_date: fields.take("end_date"),
            description: fields.take("description"),
            logo: fields.take("logo"),
        }
    }

    fn apply(&mut self, mut fields: FieldSet) {
        fields.assign("title", &mut self.title);
        fields.assign("company", &mut self.company);
        fields.assign("start_date", &mut self.start_date);
        fields.assign("end_date", &mut self.end_date);
        fields.assign("description", &mut self.description);
        fields.assign("logo", &mut self.logo);
    }

    fn collection(store: &ResumeStore) -> &Collection<Self> {
        &store.experience
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Education {
    pub id: u64,
    pub course: String,
    pub school: String,
    pub start_date: String,
    pub end_date: String,
    pub grade: String,
    pub logo: String,
}

impl Record for Education {
    const KIND: &'static str = "education";
    const LABEL: &'static str = "Education";
    const SCHEMA: Schema = Schema {
        fields: &["course", "school", "start_date", "end_date", "grade", "logo"],
        formats: &[],
    };

    fn id(&self) -> u64 {
        self.id
    }

    fn from_fields(id: u64, mut fields: FieldSet) -> Self {
        Education {
            id,
            course: fields.take("course"),
            school: fields.take("school"),
            start_date: fields.take("start_date"),
            end_date: fields.take("end_date"),
            grade: fields.take("grade"),
            logo: fields.take("logo"),
        }
    }

    fn apply(&mut self, mut fields: FieldSet) {
        fields.assign("course", &mut self.course);
        fields.assign("school", &mut self.school);
        fields.assign("start_date", &mut self.start_date);
        fields.assign("end_date", &mut self.end_date);
        fields.assign("grade", &mut self.grade);
        fields.assign("logo", &mut self.logo);
    }

    fn collection(store: &ResumeStore) -> &Collection<Self> {
        &store.education
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Skill {
    pub id: u64,
    pub name: String,
    pub proficiency: String,
    pub logo: String,
}

impl Record for Skill {
    const KIND: &'static str = "skill";
    const LABEL: &'static str = "Skill";
    const SCHEMA: Schema = Schema {
        fields: &["name", "proficiency", "logo"],
        formats: &[],
    };

    fn id(&self) -> u64 {
        self.id
    }

    fn from_fields(id: u64, mut fields: FieldSet) -> Self {
        Skill {
            id,
            name: fields.take("name"),
            proficiency: fields.take("proficiency"),
            logo: fields.take("logo"),
        }
    }

    fn apply(&mut self, mut fields: FieldSet) {
        fields.assign("name", &mut self.name);
        fields.assign("proficiency", &mut self.proficiency);
        fields.assign("logo", &mut self.logo);
    }

    fn collection(store: &ResumeStore) -> &Collection<Self> {
        &store.skill
    }
}
