use sea_orm_migration::prelude::*;

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        // Santri (student) table
        manager
            .create_table(
                Table::create()
                    .table(Santri::Table)
                    .if_not_exists()
                    .col(
                        ColumnDef::new(Santri::Id)
                            .big_integer()
                            .not_null()
                            .auto_increment()
                            .primary_key(),
                    )
                    .col(ColumnDef::new(Santri::Nama).string().not_null())
                    .col(ColumnDef::new(Santri::Kelas).integer().not_null())
                    .col(ColumnDef::new(Santri::JenisKelamin).string().not_null())
                    .col(
                        ColumnDef::new(Santri::TotalHafalan)
                            .integer()
                            .not_null()
                            .default(0),
                    )
                    .col(ColumnDef::new(Santri::CreatedAt).big_integer().not_null())
                    .to_owned(),
            )
            .await?;

        // Setoran (memorization submission) table
        manager
            .create_table(
                Table::create()
                    .table(Setoran::Table)
                    .if_not_exists()
                    .col(
                        ColumnDef::new(Setoran::Id)
                            .big_integer()
                            .not_null()
                            .auto_increment()
                            .primary_key(),
                    )
                    .col(ColumnDef::new(Setoran::SantriId).big_integer().not_null())
                    .col(ColumnDef::new(Setoran::Tanggal).big_integer().not_null())
                    .col(ColumnDef::new(Setoran::Juz).integer().not_null())
                    .col(ColumnDef::new(Setoran::Surat).string().not_null())
                    .col(ColumnDef::new(Setoran::AwalAyat).integer().not_null())
                    .col(ColumnDef::new(Setoran::AkhirAyat).integer().not_null())
                    .col(ColumnDef::new(Setoran::Kelancaran).integer().not_null())
                    .col(ColumnDef::new(Setoran::Tajwid).integer().not_null())
                    .col(ColumnDef::new(Setoran::Tahsin).integer().not_null())
                    .col(ColumnDef::new(Setoran::Catatan).text().null())
                    .col(ColumnDef::new(Setoran::DiujiOleh).string().not_null())
                    .col(ColumnDef::new(Setoran::CreatedAt).big_integer().not_null())
                    .col(ColumnDef::new(Setoran::ArchivedAt).big_integer().null())
                    .foreign_key(
                        ForeignKey::create()
                            .from(Setoran::Table, Setoran::SantriId)
                            .to(Santri::Table, Santri::Id)
                            .on_delete(ForeignKeyAction::Cascade),
                    )
                    .to_owned(),
            )
            .await?;

        // Archive manifest table (one row per completed migration run)
        manager
            .create_table(
                Table::create()
                    .table(SetoranArchives::Table)
                    .if_not_exists()
                    .col(
                        ColumnDef::new(SetoranArchives::Id)
                            .big_integer()
                            .not_null()
                            .auto_increment()
                            .primary_key(),
                    )
                    .col(
                        ColumnDef::new(SetoranArchives::ArchiveName)
                            .string()
                            .not_null(),
                    )
                    .col(
                        ColumnDef::new(SetoranArchives::GoogleSheetId)
                            .string()
                            .not_null(),
                    )
                    .col(
                        ColumnDef::new(SetoranArchives::GoogleSheetUrl)
                            .string()
                            .not_null(),
                    )
                    .col(
                        ColumnDef::new(SetoranArchives::PeriodStart)
                            .big_integer()
                            .not_null(),
                    )
                    .col(
                        ColumnDef::new(SetoranArchives::PeriodEnd)
                            .big_integer()
                            .not_null(),
                    )
                    .col(
                        ColumnDef::new(SetoranArchives::TotalRecords)
                            .integer()
                            .not_null(),
                    )
                    .col(
                        ColumnDef::new(SetoranArchives::CreatedAt)
                            .big_integer()
                            .not_null(),
                    )
                    .to_owned(),
            )
            .await?;

        // Indexes: the archival scan filters on tanggal + archived_at, the
        // maintainer and rankings filter on santri_id.
        manager
            .create_index(
                Index::create()
                    .if_not_exists()
                    .name("idx_setoran_santri_id")
                    .table(Setoran::Table)
                    .col(Setoran::SantriId)
                    .to_owned(),
            )
            .await?;

        manager
            .create_index(
                Index::create()
                    .if_not_exists()
                    .name("idx_setoran_tanggal")
                    .table(Setoran::Table)
                    .col(Setoran::Tanggal)
                    .to_owned(),
            )
            .await?;

        manager
            .create_index(
                Index::create()
                    .if_not_exists()
                    .name("idx_setoran_archived_at")
                    .table(Setoran::Table)
                    .col(Setoran::ArchivedAt)
                    .to_owned(),
            )
            .await?;

        manager
            .create_index(
                Index::create()
                    .if_not_exists()
                    .name("idx_santri_jenis_kelamin")
                    .table(Santri::Table)
                    .col(Santri::JenisKelamin)
                    .to_owned(),
            )
            .await?;

        Ok(())
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_table(Table::drop().table(SetoranArchives::Table).to_owned())
            .await?;
        manager
            .drop_table(Table::drop().table(Setoran::Table).to_owned())
            .await?;
        manager
            .drop_table(Table::drop().table(Santri::Table).to_owned())
            .await?;
        Ok(())
    }
}

#[derive(DeriveIden)]
enum Santri {
    #[sea_orm(iden = "santri")]
    Table,
    Id,
    Nama,
    Kelas,
    JenisKelamin,
    TotalHafalan,
    CreatedAt,
}

#[derive(DeriveIden)]
enum Setoran {
    #[sea_orm(iden = "setoran")]
    Table,
    Id,
    SantriId,
    Tanggal,
    Juz,
    Surat,
    AwalAyat,
    AkhirAyat,
    Kelancaran,
    Tajwid,
    Tahsin,
    Catatan,
    DiujiOleh,
    CreatedAt,
    ArchivedAt,
}

#[derive(DeriveIden)]
enum SetoranArchives {
    #[sea_orm(iden = "setoran_archives")]
    Table,
    Id,
    ArchiveName,
    GoogleSheetId,
    GoogleSheetUrl,
    PeriodStart,
    PeriodEnd,
    TotalRecords,
    CreatedAt,
}
