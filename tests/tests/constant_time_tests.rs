// Entry point for the timing tests under tests/constant_time/.
// They are statistical and machine-dependent, so they run on demand:
//   cargo test -p bls381-tests --test constant_time_tests -- --ignored --nocapture

mod constant_time;
