//! One-call helpers for whole object streams.

use robtop_bytes::{Options, Result, Writer};
use robtop_objects::AnyObject;

use crate::ObjectIter;

/// Decode every object in `bytes`, inferring kinds from ids.
pub fn decode_objects(bytes: &[u8], options: &Options) -> Result<Vec<AnyObject>> {
    let objects = ObjectIter::new(bytes, *options).collect::<Result<Vec<_>>>()?;
    tracing::debug!(count = objects.len(), bytes = bytes.len(), "decoded objects");
    Ok(objects)
}

/// Encode objects back to back.
///
/// Every id must infer back to its object's kind, otherwise the stream
/// could not be decoded and `KindMismatch` is returned.
pub fn encode_objects(objects: &[AnyObject], options: &Options) -> Result<Vec<u8>> {
    let mut writer = Writer::new();
    for object in objects {
        object.encode(&mut writer, options)?;
    }
    tracing::debug!(count = objects.len(), bytes = writer.len(), "encoded objects");
    Ok(writer.into_bytes())
}

#[cfg(test)]
mod tests {
    use super::*;
    use robtop_bytes::{ByteOrder, FormatError};
    use robtop_objects::{AsObject, ObjectKind};

    #[test]
    fn every_kind_in_one_stream() {
        let options = Options::default().with_order(ByteOrder::Big);
        let level: Vec<_> = ObjectKind::ALL.iter().map(|&kind| AnyObject::new(kind)).collect();

        let bytes = encode_objects(&level, &options).unwrap();
        assert_eq!(decode_objects(&bytes, &options).unwrap(), level);
    }

    #[test]
    fn unknown_ids_decode_as_plain_objects() {
        let mut object = AnyObject::new(ObjectKind::Object);
        object.object_mut().id = 8;

        let bytes = encode_objects(&[object.clone()], &Options::default()).unwrap();
        assert_eq!(decode_objects(&bytes, &Options::default()).unwrap(), [object]);
    }

    #[test]
    fn id_of_another_kind_fails_the_stream() {
        let mut object = AnyObject::new(ObjectKind::Object);
        object.object_mut().id = 36;
        let level = [object, AnyObject::new(ObjectKind::Coin)];

        assert!(matches!(
            encode_objects(&level, &Options::default()),
            Err(FormatError::KindMismatch { id: 36, .. })
        ));
    }

    #[test]
    fn truncated_stream() {
        let bytes = encode_objects(&[AnyObject::new(ObjectKind::Text)], &Options::default())
            .unwrap();
        assert!(matches!(
            decode_objects(&bytes[..bytes.len() - 1], &Options::default()),
            Err(FormatError::Truncated { .. })
        ));
    }
}
