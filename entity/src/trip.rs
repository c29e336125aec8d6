use sea_orm::entity::prelude::*;

#[derive(Clone, Debug, PartialEq, Eq, DeriveEntityModel)]
#[sea_orm(table_name = "trip")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub id: i32,
    pub departure_place: String,
    pub arrival_place: String,
    pub departure_date: Date,
    pub departure_time: Time,
    pub arrival_date: Date,
    pub arrival_time: Time,
    pub seats: i32,
    pub price: i32,
    pub status: TripStatus,
    pub created_at: DateTimeUtc,
}

/// Lifecycle state of a trip, stored as its French label.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, EnumIter, DeriveActiveEnum)]
#[sea_orm(rs_type = "String", db_type = "String(StringLen::N(16))")]
pub enum TripStatus {
    #[sea_orm(string_value = "disponible")]
    Available,
    #[sea_orm(string_value = "confirmé")]
    Confirmed,
    #[sea_orm(string_value = "complet")]
    Full,
    #[sea_orm(string_value = "annulé")]
    Cancelled,
    #[sea_orm(string_value = "terminé")]
    Completed,
}

impl TripStatus {
    /// Statuses under which seats may still be booked.
    pub const BOOKABLE: [TripStatus; 2] = [TripStatus::Available, TripStatus::Confirmed];

    /// Statuses from which a trip or a seat may still be cancelled.
    pub const CANCELLABLE: [TripStatus; 3] = [
        TripStatus::Available,
        TripStatus::Confirmed,
        TripStatus::Full,
    ];

    pub fn label(self) -> &'static str {
        match self {
            Self::Available => "disponible",
            Self::Confirmed => "confirmé",
            Self::Full => "complet",
            Self::Cancelled => "annulé",
            Self::Completed => "terminé",
        }
    }

    pub fn from_label(label: &str) -> Option<Self> {
        match label {
            "disponible" => Some(Self::Available),
            "confirmé" => Some(Self::Confirmed),
            "complet" => Some(Self::Full),
            "annulé" => Some(Self::Cancelled),
            "terminé" => Some(Self::Completed),
            _ => None,
        }
    }

    /// The transition table. Cancelled and Completed are terminal.
    pub fn can_transition_to(self, next: TripStatus) -> bool {
        use TripStatus::*;

        matches!(
            (self, next),
            (Available, Confirmed | Full | Cancelled | Completed)
                | (Confirmed, Available | Full | Cancelled | Completed)
                | (Full, Available | Confirmed | Cancelled | Completed)
        )
    }

    pub fn is_bookable(self) -> bool {
        Self::BOOKABLE.contains(&self)
    }

    pub fn is_cancellable(self) -> bool {
        Self::CANCELLABLE.contains(&self)
    }
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {
    #[sea_orm(has_many = "super::participation::Entity")]
    Participations,
    #[sea_orm(has_one = "super::trip_vehicle::Entity")]
    TripVehicle,
    #[sea_orm(has_many = "super::review::Entity")]
    Reviews,
}

impl Related<super::participation::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::Participations.def()
    }
}

impl Related<super::trip_vehicle::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::TripVehicle.def()
    }
}

impl Related<super::vehicle::Entity> for Entity {
    fn to() -> RelationDef {
        super::trip_vehicle::Relation::Vehicle.def()
    }

    fn via() -> Option<RelationDef> {
        Some(super::trip_vehicle::Relation::Trip.def().rev())
    }
}

impl Related<super::review::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::Reviews.def()
    }
}

impl ActiveModelBehavior for ActiveModel {}
