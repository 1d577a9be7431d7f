use crate::resume::models::{Education, Experience, Skill};

const SAMPLE_LOGO: &str = "example-logo.png";

pub fn experience() -> Vec<Experience> {
    vec![Experience {
        id: 0,
        title: "Software Developer".to_string(),
        company: "A Cool Company".to_string(),
        start_date: "October 2022".to_string(),
        end_date: "Present".to_string(),
        description: "Writing Python Code".to_string(),
        logo: SAMPLE_LOGO.to_string(),
    }]
}

pub fn education() -> Vec<Education> {
    vec![Education {
        id: 0,
        course: "Computer Science".to_string(),
        school: "University of Tech".to_string(),
        start_date: "September 2019".to_string(),
        end_date: "July 2022".to_string(),
        grade: "80%".to_string(),
        logo: SAMPLE_LOGO.to_string(),
    }]
}

pub fn skill() -> Vec<Skill> {
    vec![Skill {
        id: 0,
        name: "Python".to_string(),
        proficiency: "1-2 Years".to_string(),
        logo: SAMPLE_LOGO.to_string(),
    }]
}
