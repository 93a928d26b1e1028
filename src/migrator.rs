use sea_orm_migration::prelude::*;

pub struct Migrator;

#[async_trait::async_trait]
impl MigratorTrait for Migrator {
    fn migrations() -> Vec<Box<dyn MigrationTrait>> {
        vec![Box::new(m20240101_000001_create_widgets_table::Migration)]
    }
}

mod m20240101_000001_create_widgets_table {

    use sea_orm_migration::prelude::*;

    pub struct Migration;

    impl MigrationName for Migration {
        fn name(&self) -> &str {
            "m20240101_000001_create_widgets_table"
        }
    }

    #[async_trait::async_trait]
    impl MigrationTrait for Migration {
        async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
            manager
                .create_table(
                    Table::create()
                        .table(Widgets::Table)
                        .if_not_exists()
                        .col(
                            ColumnDef::new(Widgets::Id)
                                .big_integer()
                                .not_null()
                                .auto_increment()
                                .primary_key(),
                        )
                        .col(
                            ColumnDef::new(Widgets::Name)
                                .string_len(100)
                                .not_null()
                                .unique_key(),
                        )
                        .col(
                            ColumnDef::new(Widgets::Description)
                                .string_len(1000)
                                .not_null(),
                        )
                        .col(ColumnDef::new(Widgets::Price).decimal_len(7, 2).not_null())
                        .to_owned(),
                )
                .await
        }

        async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
            manager
                .drop_table(Table::drop().table(Widgets::Table).to_owned())
                .await
        }
    }

    #[derive(Iden)]
    enum Widgets {
        Table,
        Id,
        Name,
        Description,
        Price,
    }
}
