pub mod configuration;

pub mod error;

pub mod manager {
    pub mod namedobject;
    pub mod managererror;
    pub mod manager;
}

pub mod time {
    pub mod utility;

    pub mod recurringholiday {
        pub mod recurringholiday;
        pub mod weekendadjustment;
        pub mod fixeddateholiday;
        pub mod relativeweekdayholiday;
        pub mod holidayrule;
        pub mod holidaysetmanager;
        pub mod defaultholidays;
    }

    pub mod schedule {
        pub mod resolvedholiday;
        pub mod holidayschedulegenerator;
    }
}

pub mod utility {
    pub mod ordinal;
}
