pub use sea_orm_migration::prelude::*;

mod m20261016_000001_create_table_profiles;
mod m20261016_000002_create_table_projects;
mod m20261016_000003_create_table_experiences;

pub struct Migrator;

#[async_trait::async_trait]
impl MigratorTrait for Migrator {
    fn migrations() -> Vec<Box<dyn MigrationTrait>> {
        vec![
            Box::new(m20261016_000001_create_table_profiles::Migration),
            Box::new(m20261016_000002_create_table_projects::Migration),
            Box::new(m20261016_000003_create_table_experiences::Migration),
        ]
    }
}
