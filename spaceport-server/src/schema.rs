//! Diesel schema definitions for the Spaceport server.

diesel::table! {
    ships (id) {
        id -> BigInt,
        name -> Text,
        planet -> Text,
        ship_type -> Text,
        prod_date -> Timestamp,
        speed -> Double,
        crew_size -> Integer,
        is_used -> Bool,
        rating -> Double,
    }
}
