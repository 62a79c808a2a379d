mod contact_inquiry;
mod description_pair;
mod generated_description;
mod project;
mod project_type;
