pub mod roundtrip_and_boundaries;
