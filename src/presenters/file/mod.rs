pub mod pbm;
