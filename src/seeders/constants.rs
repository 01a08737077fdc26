/// Tables the seeder knows how to fill, declared in foreign-key dependency order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum SeedTable {
    Policies,
    Roles,
    Permissions,
}

impl SeedTable {
    /// Seeding order: permissions reference both policies and roles.
    pub const ORDER: [SeedTable; 3] = [SeedTable::Policies, SeedTable::Roles, SeedTable::Permissions];

    pub fn table_name(self) -> &'static str {
        match self {
            SeedTable::Policies => "policies",
            SeedTable::Roles => "roles",
            SeedTable::Permissions => "permissions",
        }
    }

    /// Fixture file name (without `.json`) holding this table's rows.
    pub fn file_stem(self) -> &'static str {
        match self {
            SeedTable::Policies => "1_policies",
            SeedTable::Roles => "2_roles",
            SeedTable::Permissions => "3_permissions",
        }
    }

    pub fn from_table_name(name: &str) -> Option<Self> {
        Self::ORDER.into_iter().find(|t| t.table_name() == name)
    }

    /// Accepts table names (`roles`) and entity names (`Role`), ignoring case.
    pub fn from_model_name(name: &str) -> Option<Self> {
        match name.trim().to_ascii_lowercase().as_str() {
            "policies" | "policy" => Some(SeedTable::Policies),
            "roles" | "role" => Some(SeedTable::Roles),
            "permissions" | "permission" => Some(SeedTable::Permissions),
            _ => None,
        }
    }
}
