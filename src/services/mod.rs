pub mod payroll_calculator;
