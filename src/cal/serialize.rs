//! Serde support, through the same text forms as `Display` and `FromStr`.

use std::fmt;
use std::marker::PhantomData;
use std::str::FromStr;

use serde::de;

use crate::cal::date::Date;
use crate::cal::datetime::DateTime;
use crate::cal::time::Time;


/// Reads a value from a string with its `FromStr` implementation.
struct TextVisitor<T> {
    expecting: &'static str,
    marker: PhantomData<T>,
}

impl<'de, T> de::Visitor<'de> for TextVisitor<T>
where T: FromStr<Err = crate::Error>
{
    type Value = T;

    fn expecting(&self, f: &mut fmt::Formatter) -> fmt::Result {
        f.write_str(self.expecting)
    }

    fn visit_str<E: de::Error>(self, value: &str) -> Result<T, E> {
        value.parse().map_err(de::Error::custom)
    }
}

macro_rules! text_serde {
    ($type: ty, $expecting: expr) => {
        impl serde::Serialize for $type {
            fn serialize<S: serde::Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
                serializer.collect_str(self)
            }
        }

        impl<'de> serde::Deserialize<'de> for $type {
            fn deserialize<D: serde::Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
                deserializer.deserialize_str(TextVisitor { expecting: $expecting, marker: PhantomData })
            }
        }
    };
}

text_serde!(Date, "a date string");
text_serde!(Time, "a time string");
text_serde!(DateTime, "a date-time string");
