use robtop_codec::prelude::*;

fn main() -> Result<()> {
    println!("=== RobTop Codec Quick Start ===\n");

    // A small level: a block, a move trigger and a coin
    let mut block = Object::new(1);
    block.move_by(30.0, 15.0).add_groups([5, 3, 9]);

    let mut mover = MoveTrigger::default();
    mover.duration.duration = 0.5;
    mover.move_offset(90.0, 0.0).lock_to_player_y();
    mover.trigger.set_touch_triggered(true);

    let level = vec![
        AnyObject::from(block),
        AnyObject::from(mover),
        AnyObject::new(ObjectKind::Coin),
    ];

    for object in &level {
        println!(
            "  {:?} id={} trigger={} groups={:?}",
            object.kind(),
            object.object().id,
            object.is_trigger(),
            object.object().groups,
        );
    }

    let options = Options::default();
    let bytes = encode_objects(&level, &options)?;
    println!("\n✓ Encoded {} objects into {} bytes", level.len(), bytes.len());

    let decoded = decode_objects(&bytes, &options)?;
    assert_eq!(decoded, level);
    println!("✓ Decoded {} objects, kinds inferred from ids", decoded.len());

    // Text records
    println!("\n=== Text Records ===");
    let version = GameVersion::from_robtop("11")?;
    println!("Game version 11 is {version}");
    println!("Current game version: {}", CURRENT_GAME_VERSION);

    let progress = Progress::from_robtop("25,50,100")?;
    println!("Progress: {:?}", progress.as_slice());

    let recording = Recording::from_robtop("0.5;1;1;1.25;;")?;
    for item in &recording {
        println!(
            "  t={} previous={} next={}",
            item.timestamp, item.previous, item.next
        );
    }
    println!("Re-encoded: {}", recording.to_robtop());

    match GameVersion::from_robtop("8") {
        Ok(version) => println!("unexpected version {version}"),
        Err(error) => println!("✓ Rejected: {error}"),
    }

    Ok(())
}
