//! Workspace-level integration and golden tests for FracSort.
