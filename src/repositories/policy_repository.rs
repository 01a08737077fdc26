use sea_orm::*;
use crate::entities::{permission, policy, policy::Entity as Policy, role};

pub struct PolicyRepository;

impl PolicyRepository {
    pub async fn find_all<C: ConnectionTrait>(db: &C) -> Result<Vec<policy::Model>, DbErr> {
        Policy::find()
            .filter(policy::Column::Deleted.is_null())
            .order_by_asc(policy::Column::PolicyName)
            .all(db)
            .await
    }

    // Names that match nothing are simply absent from the result
    pub async fn find_by_names<C: ConnectionTrait>(
        db: &C,
        names: &[String],
    ) -> Result<Vec<policy::Model>, DbErr> {
        if names.is_empty() {
            return Ok(Vec::new());
        }

        Policy::find()
            .filter(policy::Column::PolicyName.is_in(names.iter().cloned()))
            .filter(policy::Column::Deleted.is_null())
            .order_by_asc(policy::Column::PolicyName)
            .all(db)
            .await
    }

    pub async fn roles_of<C: ConnectionTrait>(
        db: &C,
        policy: &policy::Model,
    ) -> Result<Vec<role::Model>, DbErr> {
        policy.find_related(role::Entity)
            .filter(role::Column::Deleted.is_null())
            .filter(permission::Column::Deleted.is_null())
            .order_by_asc(role::Column::Role)
            .all(db)
            .await
    }
}
