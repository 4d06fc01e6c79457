pub mod u001_manual_generation;
