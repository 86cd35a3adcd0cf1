//! Split a datagram holding several PDUs and decode each by type

use dis::pdus::{AnyPdu, Comment, CreateEntity, Fire, SimulationManagementHeader};
use dis::protocol::{Bytes, Codec, CodecConfig};
use dis::records::{EntityId, VariableDatum};
use dis::{Pdu, split_pdus};

fn main() -> Result<(), Box<dyn std::error::Error>> {
    println!("DIS PDU Stream Example");
    println!("======================\n");

    let management =
        SimulationManagementHeader::new(EntityId::new(1, 1, 0), EntityId::new(2, 1, 0));

    // Three PDUs back to back, as one datagram
    let mut datagram = Pdu::new(CreateEntity {
        management: management.clone(),
        request_id: 1,
    })
    .encode()?;
    datagram.extend(Pdu::new(Fire::default()).encode()?);
    datagram.extend(
        Pdu::new(Comment {
            management,
            variable_datums: vec![VariableDatum::new(1, b"checkpoint reached".to_vec())],
            ..Comment::default()
        })
        .encode()?,
    );
    // A truncated fourth PDU
    datagram.extend_from_slice(&[6, 1, 1, 1, 0, 0, 0, 0, 0, 144, 0, 0]);

    let codec = Codec::new(CodecConfig::default()).with_sink(|diagnostic| {
        println!("  diagnostic: {} failed: {}", diagnostic.record, diagnostic.error);
    });

    for (index, pdu) in split_pdus(Bytes::from(datagram)).enumerate() {
        let pdu = match pdu {
            Ok(pdu) => pdu,
            Err(error) => {
                println!("#{index}: stream ended: {error}");
                break;
            }
        };

        let outcome = codec.decode_any(&pdu)?;
        match outcome.value {
            Some(AnyPdu::Comment(comment)) => {
                let text = &comment.body.variable_datums[0].data;
                println!("#{index}: Comment {:?}", String::from_utf8_lossy(text));
            }
            Some(any) => println!("#{index}: {} ({} bytes)", any.pdu_type(), pdu.len()),
            None => println!("#{index}: not decoded"),
        }
    }

    Ok(())
}
